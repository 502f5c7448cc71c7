use serde::{Serialize, Serializer};

use super::sentiment::{LexiconScorer, PolarityScorer};

const DOWN_BELOW: f64 = -0.3;
const UPBEAT_ABOVE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    Down,
    SlightlyLow,
    Upbeat,
    Stress,
    Sleep,
    Work,
    Anxiety,
    Focus,
    KeepTracking,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::Down => {
                "You seem to be feeling down. Consider reaching out to a friend or someone you trust."
            }
            Suggestion::SlightlyLow => {
                "Things sound a little low today. A short walk or some fresh air might help."
            }
            Suggestion::Upbeat => {
                "You sound upbeat! Write down what went well so you can come back to it."
            }
            Suggestion::Stress => "Try a 3-minute breathing exercise to ease the stress.",
            Suggestion::Sleep => {
                "Aim for a consistent bedtime and put screens away an hour before sleep."
            }
            Suggestion::Work => "Schedule short breaks between work blocks to recharge.",
            Suggestion::Anxiety => {
                "When anxiety rises, ground yourself with the 5-4-3-2-1 senses exercise."
            }
            Suggestion::Focus => "Try a 25-minute focus session with notifications turned off.",
            Suggestion::KeepTracking => {
                "Keep tracking your feelings. Patterns become clearer over time."
            }
        }
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Tag rules in priority order. Each one is checked on its own, so several
/// can fire for the same entry.
const TAG_RULES: [(&str, Suggestion); 5] = [
    ("stress", Suggestion::Stress),
    ("sleep", Suggestion::Sleep),
    ("work", Suggestion::Work),
    ("anxiety", Suggestion::Anxiety),
    ("focus", Suggestion::Focus),
];

/// Turns an entry's text and tags into an ordered, never-empty list of
/// suggestions.
#[derive(Debug, Clone, Default)]
pub struct AdviceEngine<S = LexiconScorer> {
    scorer: S,
}

impl AdviceEngine<LexiconScorer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: PolarityScorer> AdviceEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn polarity(&self, entry_text: &str) -> f64 {
        self.scorer.score(entry_text)
    }

    pub fn advise(&self, entry_text: &str, tags: &[String]) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if let Some(s) = sentiment_suggestion(self.polarity(entry_text)) {
            suggestions.push(s);
        }

        let normalized = normalize_tags(tags);
        suggestions.extend(
            TAG_RULES
                .iter()
                .filter(|(tag, _)| normalized.iter().any(|t| t == tag))
                .map(|(_, s)| *s),
        );

        if suggestions.is_empty() {
            suggestions.push(Suggestion::KeepTracking);
        }
        suggestions
    }
}

fn sentiment_suggestion(polarity: f64) -> Option<Suggestion> {
    if polarity < DOWN_BELOW {
        Some(Suggestion::Down)
    } else if polarity < 0.0 {
        Some(Suggestion::SlightlyLow)
    } else if polarity > UPBEAT_ABOVE {
        Some(Suggestion::Upbeat)
    } else {
        None
    }
}

/// Lower-cases and trims tags for rule matching, dropping empties.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
