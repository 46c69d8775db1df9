//! Supplement extraction: name, dose quantity, and micronutrient mapping.

use crate::estimator;
use crate::types::ParsedSupplementCommand;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Words that anchor the supplement name: the name is the text after the
/// first word containing one of these
static NAME_KEYWORDS: &[&str] = &["vitamin", "mineral", "supplement", "pill", "capsule", "tablet"];

static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(mg|g|mcg|iu|units?|capsules?|tablets?)\b")
        .expect("hard-coded pattern is valid")
});

pub fn extract(command: &str) -> ParsedSupplementCommand {
    let name = extract_name(command);

    let (quantity, dose_value) = match QUANTITY_RE.captures(command) {
        Some(caps) => {
            let value = caps[1].parse::<f64>().unwrap_or(1.0);
            (Some(caps[0].to_string()), value)
        }
        None => (None, 1.0),
    };

    let nutrients: HashMap<String, f64> = estimator::nutrient_ids_in(command)
        .into_iter()
        .map(|id| (id.to_string(), dose_value))
        .collect();

    ParsedSupplementCommand {
        name,
        quantity,
        nutrients,
    }
}

fn extract_name(command: &str) -> String {
    let words: Vec<&str> = command.split_whitespace().collect();

    let keyword_pos = words.iter().position(|w| {
        let w = w.to_lowercase();
        NAME_KEYWORDS.iter().any(|k| w.contains(k))
    });

    if let Some(pos) = keyword_pos {
        let after = words[pos + 1..].join(" ");
        if !after.trim().is_empty() {
            return after.trim().to_string();
        }
    }

    // No usable keyword anchor: last word longer than 2 characters
    words
        .iter()
        .rev()
        .find(|w| w.len() > 2)
        .map(|w| (*w).to_string())
        .unwrap_or_else(|| "Unknown Supplement".to_string())
}
