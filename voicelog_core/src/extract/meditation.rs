//! Meditation extraction: duration (shared workout regex) and session type.

use crate::types::ParsedMeditationCommand;
use crate::units::duration_to_minutes;

use super::workout::DURATION_RE;

/// Default session length when none is spoken
const DEFAULT_DURATION_MINUTES: u32 = 10;

/// Session type keywords, checked in order
static MEDITATION_TYPES: &[(&[&str], &str)] = &[
    (&["guided"], "guided"),
    (&["silent"], "silent"),
    (&["walking"], "walking"),
    (&["body scan", "bodyscan"], "body_scan"),
    (&["loving kindness"], "loving_kindness"),
    (&["transcendental"], "transcendental"),
    (&["mindfulness"], "mindfulness"),
];

const DEFAULT_TYPE: &str = "guided";

pub fn extract(command: &str) -> ParsedMeditationCommand {
    let lowered = command.to_lowercase();

    let duration_minutes = DURATION_RE
        .captures(&lowered)
        .and_then(|caps| {
            let value = caps[1].parse::<u32>().ok()?;
            Some(duration_to_minutes(value, &caps[2]))
        })
        .unwrap_or(DEFAULT_DURATION_MINUTES);

    let meditation_type = MEDITATION_TYPES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, id)| (*id).to_string())
        .unwrap_or_else(|| DEFAULT_TYPE.to_string());

    ParsedMeditationCommand {
        duration_minutes,
        meditation_type,
    }
}
