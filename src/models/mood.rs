use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five selectable moods, highest to lowest. Scores are fixed at 5..=1
/// and must not be renumbered: stored logs depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[serde(alias = "😄")]
    Joyful,
    #[serde(alias = "🙂")]
    Content,
    #[serde(alias = "😐")]
    Neutral,
    #[serde(alias = "😕")]
    Uneasy,
    #[serde(alias = "😞")]
    Down,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Joyful,
        Mood::Content,
        Mood::Neutral,
        Mood::Uneasy,
        Mood::Down,
    ];

    pub fn score(self) -> i32 {
        match self {
            Mood::Joyful => 5,
            Mood::Content => 4,
            Mood::Neutral => 3,
            Mood::Uneasy => 2,
            Mood::Down => 1,
        }
    }

    pub fn from_score(score: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.score() == score)
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Joyful => "😄",
            Mood::Content => "🙂",
            Mood::Neutral => "😐",
            Mood::Uneasy => "😕",
            Mood::Down => "😞",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Joyful => "joyful",
            Mood::Content => "content",
            Mood::Neutral => "neutral",
            Mood::Uneasy => "uneasy",
            Mood::Down => "down",
        }
    }
}

/// A stored journal entry. `score` is always derived from `mood`, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub mood: Mood,
    #[serde(default)]
    pub entry_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MoodEntry {
    pub fn new(
        user_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        mood: Mood,
        entry_text: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            timestamp,
            mood,
            entry_text: entry_text.into(),
            tags: clean_tags(tags),
        }
    }

    pub fn score(&self) -> i32 {
        self.mood.score()
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Wire shape of a stored entry; adds the derived score for clients.
#[derive(Debug, Clone, Serialize)]
pub struct MoodEntryView {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub mood: Mood,
    pub emoji: &'static str,
    pub score: i32,
    pub entry_text: String,
    pub tags: Vec<String>,
}

impl From<&MoodEntry> for MoodEntryView {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            id: entry.id,
            timestamp: entry.timestamp,
            mood: entry.mood,
            emoji: entry.mood.emoji(),
            score: entry.score(),
            entry_text: entry.entry_text.clone(),
            tags: entry.tags.clone(),
        }
    }
}

/// Trims each tag and drops the empty ones. Case is preserved.
pub fn clean_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_run_five_to_one_in_declaration_order() {
        let scores: Vec<i32> = Mood::ALL.iter().map(|m| m.score()).collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn score_mapping_is_bijective() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_score(mood.score()), Some(mood));
        }
        assert_eq!(Mood::from_score(0), None);
        assert_eq!(Mood::from_score(6), None);
    }

    #[test]
    fn mood_deserializes_from_label_or_emoji() {
        let by_label: Mood = serde_json::from_str("\"uneasy\"").unwrap();
        let by_emoji: Mood = serde_json::from_str("\"😕\"").unwrap();
        assert_eq!(by_label, Mood::Uneasy);
        assert_eq!(by_emoji, Mood::Uneasy);
        assert!(serde_json::from_str::<Mood>("\"ecstatic\"").is_err());
    }

    #[test]
    fn stored_record_without_optional_fields_reads_back_with_defaults() {
        let raw = r#"{
            "id": "6f1c1a0e-8d2b-4a4e-9a39-0b8f0f3a9d11",
            "user_id": "u1",
            "timestamp": "2024-03-01T08:00:00Z",
            "mood": "content"
        }"#;
        let entry: MoodEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.entry_text, "");
        assert!(entry.tags.is_empty());
        assert_eq!(entry.score(), 4);
    }
}
