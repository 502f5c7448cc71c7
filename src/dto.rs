//! # MoodMate — Request/Response DTOs
//!
//! API contract types that are not domain models.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Response` → serialized to client JSON
//! - Length limits are expressed via `validator` derive macros

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::mood::{clean_tags, Mood, MoodEntryView};
use crate::services::advice::Suggestion;
use crate::services::aggregate::Dashboard;

pub const MAX_TAGS: usize = 20;
pub const MAX_TAG_LEN: usize = 50;

// ============================================================================
// Entries
// ============================================================================

/// Tags arrive either as the comma-separated text field or as a JSON array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    Csv(String),
    List(Vec<String>),
}

impl TagsInput {
    pub fn into_tags(self) -> Vec<String> {
        match self {
            TagsInput::Csv(raw) => clean_tags(raw.split(',').map(str::to_string)),
            TagsInput::List(list) => clean_tags(list),
        }
    }
}

/// POST /api/entries
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitEntryRequest {
    /// Mood label ("joyful") or its emoji ("😄")
    pub mood: Mood,

    /// Optional; absent and `null` both mean no text
    #[serde(default)]
    #[validate(length(max = 5000, message = "Journal entry must be at most 5000 characters"))]
    pub entry_text: Option<String>,

    #[serde(default)]
    pub tags: Option<TagsInput>,
}

impl SubmitEntryRequest {
    pub fn into_parts(self) -> (Mood, String, Vec<String>) {
        (
            self.mood,
            self.entry_text.unwrap_or_default(),
            self.tags.map(TagsInput::into_tags).unwrap_or_default(),
        )
    }
}

/// Response for POST /api/entries
#[derive(Debug, Serialize)]
pub struct SubmitEntryResponse {
    pub message: &'static str,
    pub entry: MoodEntryView,
    /// Advice on the entry exactly as submitted
    pub submission_advice: Vec<Suggestion>,
    /// Trends view rebuilt from storage after the write
    pub dashboard: Dashboard,
}

/// GET /api/entries
#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<MoodEntryView>,
    pub total: usize,
}

// ============================================================================
// Static content
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub label: &'static str,
    pub emoji: &'static str,
    pub score: i32,
}

impl From<Mood> for MoodOption {
    fn from(mood: Mood) -> Self {
        Self {
            label: mood.label(),
            emoji: mood.emoji(),
            score: mood.score(),
        }
    }
}

/// GET /api/wellness
#[derive(Debug, Serialize)]
pub struct WellnessResponse {
    pub mindfulness_track_url: String,
    pub self_care_checklist: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_tags_are_trimmed_and_empties_dropped() {
        let tags = TagsInput::Csv(" Stress, ,sleep ,,Work".into()).into_tags();
        assert_eq!(tags, vec!["Stress", "sleep", "Work"]);
    }

    #[test]
    fn list_tags_keep_case() {
        let tags = TagsInput::List(vec!["  Focus ".into(), "".into()]).into_tags();
        assert_eq!(tags, vec!["Focus"]);
    }

    #[test]
    fn submit_request_accepts_comma_separated_tags() {
        let body = r#"{"mood":"😄","tags":"focus, work"}"#;
        let req: SubmitEntryRequest = serde_json::from_str(body).unwrap();
        let (mood, entry_text, tags) = req.into_parts();
        assert_eq!(mood, Mood::Joyful);
        assert_eq!(entry_text, "");
        assert_eq!(tags, vec!["focus", "work"]);
    }

    #[test]
    fn null_text_and_tags_read_as_empty() {
        let body = r#"{"mood":"neutral","entry_text":null,"tags":null}"#;
        let req: SubmitEntryRequest = serde_json::from_str(body).unwrap();
        let (mood, entry_text, tags) = req.into_parts();
        assert_eq!(mood, Mood::Neutral);
        assert_eq!(entry_text, "");
        assert!(tags.is_empty());
    }

    #[test]
    fn overlong_entry_fails_validation() {
        let req = SubmitEntryRequest {
            mood: Mood::Neutral,
            entry_text: Some("a".repeat(5001)),
            tags: None,
        };
        assert!(req.validate().is_err());
    }
}
