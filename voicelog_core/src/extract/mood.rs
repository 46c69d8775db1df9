//! Mood extraction: a 1-5 level plus recognized emotion words.

use crate::types::ParsedMoodCommand;
use once_cell::sync::Lazy;
use regex::Regex;

/// A bare 1-5 anywhere in the text wins over word buckets
static LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([1-5])\b").expect("hard-coded pattern is valid"));

/// Level word buckets, checked in order
static LEVEL_BUCKETS: &[(&[&str], u8)] = &[
    (&["terrible", "awful", "horrible"], 1),
    (&["bad", "sad", "down"], 2),
    (&["okay", "ok", "fine", "meh"], 3),
    (&["good", "happy", "great"], 4),
    (&["excellent", "amazing", "fantastic"], 5),
];

/// Neutral default when the text carries no level information
const DEFAULT_LEVEL: u8 = 3;

/// Recognized emotion vocabulary; results are reported in this order
static EMOTION_VOCABULARY: &[&str] = &[
    "happy",
    "sad",
    "angry",
    "anxious",
    "stressed",
    "calm",
    "excited",
    "tired",
    "energetic",
    "frustrated",
    "content",
    "worried",
];

pub fn extract(command: &str) -> ParsedMoodCommand {
    let lowered = command.to_lowercase();

    let level = LEVEL_RE
        .captures(&lowered)
        .and_then(|caps| caps[1].parse::<u8>().ok())
        .or_else(|| {
            LEVEL_BUCKETS
                .iter()
                .find(|(words, _)| words.iter().any(|w| lowered.contains(w)))
                .map(|(_, level)| *level)
        })
        .unwrap_or(DEFAULT_LEVEL);

    let emotions: Vec<String> = EMOTION_VOCABULARY
        .iter()
        .filter(|word| lowered.contains(*word))
        .map(|word| (*word).to_string())
        .collect();

    ParsedMoodCommand { level, emotions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_level_wins() {
        // "great" alone would be 4; the explicit number takes precedence
        let parsed = extract("mood 2, although the weather is great");
        assert_eq!(parsed.level, 2);
    }

    #[test]
    fn test_bucket_levels() {
        assert_eq!(extract("feeling terrible").level, 1);
        assert_eq!(extract("mood is bad").level, 2);
        assert_eq!(extract("feeling meh").level, 3);
        assert_eq!(extract("mood is good").level, 4);
        assert_eq!(extract("feeling fantastic").level, 5);
    }

    #[test]
    fn test_default_level() {
        assert_eq!(extract("log my mood").level, 3);
    }

    #[test]
    fn test_out_of_range_numbers_ignored() {
        // 10 is not a bare 1-5 digit, so the bucket words decide
        let parsed = extract("mood 10 but feeling happy");
        assert_eq!(parsed.level, 4);
    }

    #[test]
    fn test_emotions_in_vocabulary_order() {
        let parsed = extract("feeling stressed and sad and tired");
        assert_eq!(parsed.emotions, vec!["sad", "stressed", "tired"]);
    }

    #[test]
    fn test_no_emotions() {
        assert!(extract("mood 4").emotions.is_empty());
    }

    #[test]
    fn test_level_always_in_bounds() {
        for input in ["", "mood", "feeling 9999", "mood -3", "mood 0"] {
            let level = extract(input).level;
            assert!((1..=5).contains(&level), "level {level} for {input:?}");
        }
    }
}
