//! Workout extraction. Every field is independently optional.

use crate::types::ParsedWorkoutCommand;
use crate::units::duration_to_minutes;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shared with the meditation extractor.
pub(crate) static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(minutes?|mins?|hours?|hrs?)\b").expect("hard-coded pattern is valid")
});

static DISTANCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(miles?|kilometers?|km|meters?|m)\b")
        .expect("hard-coded pattern is valid")
});

static CALORIES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(calories|cal|kcal)\b").expect("hard-coded pattern is valid")
});

/// Keyword groups to workout type, first match wins
static WORKOUT_TYPES: &[(&[&str], &str)] = &[
    (&["run", "jog"], "Running"),
    (&["walk"], "Walking"),
    (&["bike", "cycling"], "Cycling"),
    (&["swim"], "Swimming"),
    (&["lift", "weight"], "Weight Training"),
    (&["yoga"], "Yoga"),
];

pub fn extract(command: &str) -> ParsedWorkoutCommand {
    let lowered = command.to_lowercase();

    let workout_type = WORKOUT_TYPES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| "Other".to_string());

    let duration_minutes = DURATION_RE.captures(&lowered).and_then(|caps| {
        let value = caps[1].parse::<u32>().ok()?;
        Some(duration_to_minutes(value, &caps[2]))
    });

    let (distance, distance_unit) = match DISTANCE_RE.captures(&lowered) {
        Some(caps) => (
            caps[1].parse::<f64>().ok(),
            Some(normalize_distance_unit(&caps[2]).to_string()),
        ),
        None => (None, None),
    };

    let calories_burned = CALORIES_RE
        .captures(&lowered)
        .and_then(|caps| caps[1].parse::<u32>().ok());

    ParsedWorkoutCommand {
        workout_type,
        duration_minutes,
        distance,
        distance_unit,
        calories_burned,
    }
}

/// Normalize a matched distance unit by substring precedence: the full word
/// beats its abbreviation.
fn normalize_distance_unit(unit: &str) -> &'static str {
    if unit.contains("mile") {
        "miles"
    } else if unit.contains("kilometer") || unit == "km" {
        "km"
    } else {
        "meters"
    }
}
