//! Sleep extraction: hours and a bucketed quality rating.

use crate::types::ParsedSleepCommand;
use once_cell::sync::Lazy;
use regex::Regex;

static HOURS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(hours?|hrs?)\b").expect("hard-coded pattern is valid")
});

/// Quality buckets, checked in order; first bucket with any matching word wins
static QUALITY_BUCKETS: &[(&[&str], &str)] = &[
    (&["poor", "bad", "terrible"], "poor"),
    (&["fair", "okay", "ok"], "fair"),
    (&["good", "well"], "good"),
    (&["excellent", "great", "amazing"], "excellent"),
];

pub fn extract(command: &str) -> ParsedSleepCommand {
    let lowered = command.to_lowercase();

    let hours = HOURS_RE
        .captures(&lowered)
        .and_then(|caps| caps[1].parse::<f64>().ok());

    let quality = QUALITY_BUCKETS
        .iter()
        .find(|(words, _)| words.iter().any(|w| lowered.contains(w)))
        .map(|(_, label)| (*label).to_string());

    ParsedSleepCommand { hours, quality }
}
