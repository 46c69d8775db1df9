//! Body weight extraction.
//!
//! Unlike water there is no default: a weight command without a value is a
//! hard extraction failure. The asymmetry is intentional and load-bearing
//! for hosts (a guessed body weight would be silently logged as real data).

use crate::error::{Error, Result};
use crate::types::ParsedWeightCommand;
use crate::units::canonical_weight_unit;
use once_cell::sync::Lazy;
use regex::Regex;

static WEIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(pounds?|lbs?|kilograms?|kgs?|kg)\b")
        .expect("hard-coded pattern is valid")
});

pub fn extract(command: &str) -> Result<ParsedWeightCommand> {
    let lowered = command.to_lowercase();

    let caps = WEIGHT_RE.captures(&lowered).ok_or_else(|| {
        Error::Extraction(
            "could not find a weight value; say a number followed by lbs or kg".to_string(),
        )
    })?;

    let weight = caps[1]
        .parse::<f64>()
        .map_err(|e| Error::Extraction(format!("invalid weight number: {e}")))?;

    Ok(ParsedWeightCommand {
        weight,
        unit: canonical_weight_unit(&caps[2]).to_string(),
    })
}
