//! Water intake extraction.

use crate::types::ParsedWaterCommand;
use crate::units::convert_to_ml;
use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(ounces?|oz|ml|milliliters?|cups?|liters?|l)\b")
        .expect("hard-coded pattern is valid")
});

/// Default when no amount is spoken: one 8 oz glass. A deliberate default,
/// not a failure; water is the only extractor with one.
const DEFAULT_GLASS_OZ: f64 = 8.0;

pub fn extract(command: &str) -> ParsedWaterCommand {
    let lowered = command.to_lowercase();

    let (amount, unit) = match AMOUNT_RE.captures(&lowered) {
        Some(caps) => {
            let amount = caps[1].parse::<f64>().unwrap_or(DEFAULT_GLASS_OZ);
            (amount, caps[2].to_string())
        }
        None => (DEFAULT_GLASS_OZ, "ounces".to_string()),
    };

    ParsedWaterCommand {
        amount_ml: convert_to_ml(amount, &unit),
    }
}
