//! Journal entry extraction: content plus an optional free-text mood word.
//!
//! The mood here is a word like "happy" or "anxious", distinct from the 1-5
//! mood scale of the mood extractor.

use crate::types::ParsedJournalCommand;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading trigger phrase, optionally followed by a connective or colon
static LEAD_TRIGGER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:journal(?:ing)?|write|log)\b(?:\s+(?:about|that|this)\b|\s*:)?\s*")
        .expect("hard-coded pattern is valid")
});

/// Leading generic noun ("thought:", "entry", ...)
static LEAD_NOUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:thoughts?|entry)\b\s*:?\s*").expect("hard-coded pattern is valid")
});

/// Narrower retry: capture whatever follows a trigger phrase
static RETRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:journal(?:ing)?|write\s+about|log\s+thoughts?)\s*:?\s+(.+)")
        .expect("hard-coded pattern is valid")
});

/// Mood word buckets, checked in order
static MOOD_BUCKETS: &[(&[&str], &str)] = &[
    (&["happy", "great", "excited"], "happy"),
    (&["sad", "down", "depressed"], "sad"),
    (&["anxious", "worried", "nervous"], "anxious"),
    (&["stressed", "overwhelmed"], "stressed"),
    (&["calm", "peaceful", "relaxed"], "calm"),
    (&["angry", "frustrated", "mad"], "angry"),
];

const MIN_CONTENT_LEN: usize = 5;

pub fn extract(command: &str) -> ParsedJournalCommand {
    let content = extract_content(command);

    let lowered = command.to_lowercase();
    let mood = MOOD_BUCKETS
        .iter()
        .find(|(words, _)| words.iter().any(|w| lowered.contains(w)))
        .map(|(_, label)| (*label).to_string());

    ParsedJournalCommand { content, mood }
}

/// Content keeps the user's original casing and is never empty.
fn extract_content(command: &str) -> String {
    let mut remainder = command.trim().to_string();
    loop {
        let after_trigger = LEAD_TRIGGER_RE.replace(&remainder, "");
        let after_noun = LEAD_NOUN_RE.replace(&after_trigger, "");
        if after_noun == remainder {
            break;
        }
        remainder = after_noun.into_owned();
    }

    if remainder.trim().len() >= MIN_CONTENT_LEN {
        return remainder.trim().to_string();
    }

    if let Some(caps) = RETRY_RE.captures(command) {
        let captured = caps[1].trim();
        if captured.len() >= MIN_CONTENT_LEN {
            return captured.to_string();
        }
    }

    command.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_about() {
        let parsed = extract("journal about my day at the lake");
        assert_eq!(parsed.content, "my day at the lake");
        assert_eq!(parsed.mood, None);
    }

    #[test]
    fn test_log_thought() {
        let parsed = extract("log thought: I am happy with the progress");
        assert_eq!(parsed.content, "I am happy with the progress");
        assert_eq!(parsed.mood.as_deref(), Some("happy"));
    }

    #[test]
    fn test_write_about() {
        let parsed = extract("write about feeling worried before the exam");
        assert_eq!(parsed.content, "feeling worried before the exam");
        assert_eq!(parsed.mood.as_deref(), Some("anxious"));
    }

    #[test]
    fn test_casing_preserved() {
        let parsed = extract("journal that Today Was A Good Day");
        assert_eq!(parsed.content, "Today Was A Good Day");
    }

    #[test]
    fn test_short_content_falls_back_to_original() {
        let parsed = extract("journal: ok");
        assert_eq!(parsed.content, "journal: ok");
    }

    #[test]
    fn test_content_never_empty() {
        let parsed = extract("journaling");
        assert_eq!(parsed.content, "journaling");
    }

    #[test]
    fn test_mood_bucket_order() {
        // "happy" bucket is checked before "sad"
        let parsed = extract("journal about a happy then sad day");
        assert_eq!(parsed.mood.as_deref(), Some("happy"));
    }
}
