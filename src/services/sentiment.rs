//! Lexicon-based polarity scoring for journal text.
//!
//! Each known word carries a polarity in [-1, 1]. An intensifier directly in
//! front of a word scales it up; a negator within the two preceding tokens
//! flips it and halves it. The text's polarity is the mean over the words the
//! lexicon knows, so text without any of them is neutral.

/// Maps free text to a polarity in [-1.0, 1.0]. Implementations must be
/// total: every input yields a value.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

const NEGATION_FACTOR: f64 = -0.5;
const NEGATION_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let tokens = tokenize(text);
        let mut total = 0.0;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut polarity) = word_polarity(token) else {
                continue;
            };

            if let Some(prev) = i.checked_sub(1).map(|p| tokens[p].as_str()) {
                if let Some(factor) = intensifier(prev) {
                    polarity *= factor;
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                polarity *= NEGATION_FACTOR;
            }

            total += polarity.clamp(-1.0, 1.0);
            matched += 1;
        }

        if matched == 0 {
            return 0.0;
        }
        (total / matched as f64).clamp(-1.0, 1.0)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_negator(token: &str) -> bool {
    matches!(
        token,
        "not" | "no" | "never" | "nothing" | "hardly" | "barely" | "without" | "cannot"
    ) || token.ends_with("n't")
}

fn intensifier(token: &str) -> Option<f64> {
    match token {
        "very" | "really" | "so" | "super" => Some(1.3),
        "extremely" | "incredibly" | "totally" => Some(1.5),
        "quite" | "pretty" => Some(1.1),
        "slightly" | "somewhat" => Some(0.6),
        _ => None,
    }
}

fn word_polarity(word: &str) -> Option<f64> {
    let polarity = match word {
        // positive
        "wonderful" | "awesome" | "best" | "perfect" | "excellent" => 1.0,
        "happy" | "great" | "grateful" | "thankful" | "proud" | "joy" | "joyful" | "delighted" => 0.8,
        "excited" | "loved" => 0.75,
        "good" | "beautiful" => 0.7,
        "amazing" | "peaceful" | "hopeful" | "nice" | "energized" | "confident" => 0.6,
        "calm" | "relaxed" | "love" | "productive" | "better" | "glad" | "enjoyed" | "motivated"
        | "content" | "cheerful" => 0.5,
        "fine" | "rested" | "relieved" | "fantastic" | "accomplished" => 0.4,
        "fun" | "interesting" | "pleasant" => 0.3,
        "okay" | "ok" | "alright" => 0.2,
        // negative
        "terrible" | "awful" | "horrible" | "worst" => -1.0,
        "miserable" => -0.9,
        "depressed" | "hopeless" | "hate" | "worthless" => -0.8,
        "bad" | "sick" | "panic" => -0.7,
        "exhausted" | "angry" | "overwhelmed" | "frustrated" | "scared" => -0.6,
        "sad" | "anxious" | "stressed" | "upset" | "lonely" | "afraid" | "hurt" | "worse"
        | "drained" | "irritated" | "annoyed" | "crying" | "cried" => -0.5,
        "tired" | "worried" | "nervous" | "difficult" | "tense" => -0.4,
        "bored" | "hard" | "restless" | "lost" => -0.3,
        "slow" | "low" | "meh" | "blah" => -0.2,
        "down" | "busy" => -0.15,
        _ => return None,
    };
    Some(polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer.score(text)
    }

    #[test]
    fn empty_and_whitespace_text_is_neutral() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   \n\t "), 0.0);
    }

    #[test]
    fn text_without_known_words_is_neutral() {
        assert_eq!(score("Went to the store and bought bread."), 0.0);
    }

    #[test]
    fn averages_known_words() {
        let p = score("I feel terrible and hopeless");
        assert!((p - -0.9).abs() < 1e-9, "got {p}");
        let p = score("Had a great day and felt happy!");
        assert!((p - 0.8).abs() < 1e-9, "got {p}");
    }

    #[test]
    fn negation_flips_and_dampens() {
        assert!((score("not happy") - -0.4).abs() < 1e-9);
        assert!((score("Honestly it wasn't bad") - 0.35).abs() < 1e-9);
        assert!((score("I don’t feel good") - -0.35).abs() < 1e-9);
    }

    #[test]
    fn intensifier_scales_following_word() {
        assert!((score("very good") - 0.91).abs() < 1e-9);
        assert!((score("not very happy") - -0.52).abs() < 1e-9);
    }

    #[test]
    fn result_stays_in_range() {
        let p = score("extremely wonderful wonderful awesome");
        assert!(p <= 1.0 && p >= -1.0);
        assert_eq!(p, 1.0);
        assert_eq!(score("incredibly terrible"), -1.0);
    }

    #[test]
    fn scoring_is_case_insensitive() {
        assert_eq!(score("HAPPY"), score("happy"));
    }
}
