use serde::Serialize;

pub const TOUGH_DAYS: &str =
    "It sounds like things have been tough lately. Be gentle with yourself and take it one step at a time.";
pub const HANGING_IN: &str =
    "You're hanging in there. Small routines can help steady the days that feel in between.";
pub const DOING_WELL: &str =
    "You're doing well! Notice what's been helping and keep it in your routine.";
pub const THRIVING: &str =
    "You're thriving! Celebrate the moment and share some of that energy with someone you care about.";
pub const FALLBACK: &str = "Thanks for checking in. Every entry helps you understand yourself better.";

/// Reflection for a mood score. Total over every integer: anything outside
/// 1..=5 gets the generic message.
pub fn reflect(score: i32) -> &'static str {
    match score {
        1 | 2 => TOUGH_DAYS,
        3 => HANGING_IN,
        4 => DOING_WELL,
        5 => THRIVING,
        _ => FALLBACK,
    }
}

const POSITIVE_ABOVE: f64 = 0.2;
const DOWN_BELOW: f64 = -0.2;

/// Overall tone of a single journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Down,
}

impl Tone {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_ABOVE {
            Tone::Positive
        } else if polarity < DOWN_BELOW {
            Tone::Down
        } else {
            Tone::Neutral
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Tone::Positive => "You seem positive today 😊",
            Tone::Down => "You may be feeling a bit down 💭",
            Tone::Neutral => "You're feeling neutral 🌿",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToneSummary {
    pub tone: Tone,
    pub polarity: f64,
    pub summary: &'static str,
}

impl ToneSummary {
    pub fn new(polarity: f64) -> Self {
        let tone = Tone::from_polarity(polarity);
        Self {
            tone,
            polarity,
            summary: tone.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_scores_share_the_tough_days_message() {
        assert_eq!(reflect(1), reflect(2));
        assert_eq!(reflect(1), TOUGH_DAYS);
    }

    #[test]
    fn upper_scores_are_pairwise_distinct() {
        let (three, four, five) = (reflect(3), reflect(4), reflect(5));
        assert_ne!(three, four);
        assert_ne!(four, five);
        assert_ne!(three, five);
        assert_ne!(three, TOUGH_DAYS);
    }

    #[test]
    fn out_of_range_scores_fall_back() {
        for score in [i32::MIN, -1, 0, 6, 42, i32::MAX] {
            assert_eq!(reflect(score), FALLBACK, "score {score}");
        }
    }

    #[test]
    fn reflect_is_idempotent() {
        for score in 0..=6 {
            assert_eq!(reflect(score), reflect(score));
        }
    }

    #[test]
    fn tone_thresholds_are_exclusive() {
        assert_eq!(Tone::from_polarity(0.2), Tone::Neutral);
        assert_eq!(Tone::from_polarity(0.21), Tone::Positive);
        assert_eq!(Tone::from_polarity(-0.2), Tone::Neutral);
        assert_eq!(Tone::from_polarity(-0.21), Tone::Down);
        assert_eq!(ToneSummary::new(0.0).summary, Tone::Neutral.summary());
    }
}
