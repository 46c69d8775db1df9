//! Habit completion extraction: habit name and optional notes.

use crate::types::ParsedHabitCommand;
use once_cell::sync::Lazy;
use regex::Regex;

/// Completion verbs with an optional trailing article; longer alternatives
/// first so "completed" is not half-consumed as "complete"
static VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(completed|complete|done|finished|finish|logged|log|marked|mark)\b(\s+\b(the|an|a|my|our)\b)?",
    )
    .expect("hard-coded pattern is valid")
});

static NOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(habit|task|activity)\b").expect("hard-coded pattern is valid"));

/// Narrower retry: capture whatever follows a completion verb
static NARROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:complete|done|finished|log)\s+(?:(?:the|an|a|my|our)\s+)?(.+)")
        .expect("hard-coded pattern is valid")
});

static NOTES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:with\s+notes?\s+|notes?\s*:\s*|because\s+|reason\s*:\s*)(.+)$")
        .expect("hard-coded pattern is valid")
});

const FALLBACK_NAME: &str = "Unknown Habit";
const MIN_NAME_LEN: usize = 3;

pub fn extract(command: &str) -> ParsedHabitCommand {
    // Pull the notes clause out first so it cannot leak into the name
    let (body, notes) = match NOTES_RE.captures(command) {
        Some(caps) => {
            let note = caps[1].trim().to_string();
            let start = caps.get(0).map_or(command.len(), |m| m.start());
            (command[..start].to_string(), Some(note).filter(|n| !n.is_empty()))
        }
        None => (command.to_string(), None),
    };

    let habit_name = extract_name(&body);

    ParsedHabitCommand { habit_name, notes }
}

fn extract_name(body: &str) -> String {
    let verbless = VERB_RE.replace_all(body, " ");
    let stripped = NOUN_RE.replace_all(&verbless, " ");
    let name = title_case(stripped.trim());
    if name.len() >= MIN_NAME_LEN {
        return name;
    }

    // Narrower retry: text after the verb, minus category nouns
    if let Some(caps) = NARROW_RE.captures(body) {
        let name = title_case(NOUN_RE.replace_all(&caps[1], " ").trim());
        if name.len() >= MIN_NAME_LEN {
            return name;
        }
    }

    FALLBACK_NAME.to_string()
}

/// Capitalize the first letter of each whitespace-separated word
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_habit() {
        let parsed = extract("complete habit morning stretch");
        assert_eq!(parsed.habit_name, "Morning Stretch");
        assert_eq!(parsed.notes, None);
    }

    #[test]
    fn test_article_is_stripped() {
        let parsed = extract("completed my reading task");
        assert_eq!(parsed.habit_name, "Reading");
    }

    #[test]
    fn test_fallback_name() {
        let parsed = extract("complete habit");
        assert_eq!(parsed.habit_name, "Unknown Habit");
    }

    #[test]
    fn test_notes_with_keyword() {
        let parsed = extract("complete habit meditation done with note felt calm today");
        assert_eq!(parsed.notes.as_deref(), Some("felt calm today"));
    }

    #[test]
    fn test_notes_because() {
        let parsed = extract("mark task watering plants done because they looked dry");
        assert_eq!(parsed.habit_name, "Watering Plants");
        assert_eq!(parsed.notes.as_deref(), Some("they looked dry"));
    }

    #[test]
    fn test_notes_colon() {
        let parsed = extract("complete habit journaling done note: skipped yesterday");
        assert_eq!(parsed.notes.as_deref(), Some("skipped yesterday"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("morning stretch"), "Morning Stretch");
        assert_eq!(title_case("  walk  "), "Walk");
        assert_eq!(title_case(""), "");
    }
}
