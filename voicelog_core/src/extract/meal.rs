//! Meal extraction: meal type, food segmentation, and calorie estimation.

use crate::estimator;
use crate::types::{FoodItem, ParsedMealCommand};
use once_cell::sync::Lazy;
use regex::Regex;

/// Meal type keywords, checked in order
static MEAL_TYPES: &[&str] = &["breakfast", "lunch", "dinner", "snack"];

/// Boilerplate tokens stripped before food segmentation. Meal-type words are
/// included wholesale: a word that was not spoken strips nothing.
static STOPWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(log|an?|of|the|meal|for|breakfast|lunch|dinner|snack)\b")
        .expect("hard-coded pattern is valid")
});

/// Food segment separators: commas and the joining words
static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*(?:,|\band\b|\bwith\b|\bplus\b)\s*").expect("hard-coded pattern is valid")
});

/// Optional leading quantity, optional unit from a fixed vocabulary, then
/// the food name
static SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(\d+(?:\.\d+)?)\s*)?(?:(cups?|oz|lbs?|g|kg|pieces?|slices?|tbsp|tsp)\b\s*)?(.+)$")
        .expect("hard-coded pattern is valid")
});

pub fn extract(command: &str) -> ParsedMealCommand {
    let lowered = command.to_lowercase();

    let meal_type = MEAL_TYPES
        .iter()
        .find(|t| lowered.contains(*t))
        .map(|t| (*t).to_string());

    // Strip boilerplate from the original-cased text so food names keep the
    // user's casing, then split into segments.
    let stripped = STOPWORD_RE.replace_all(command, " ");
    let foods: Vec<FoodItem> = SEPARATOR_RE
        .split(stripped.trim())
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_segment)
        .collect();

    let total_calories = estimator::estimate_total_calories(
        foods
            .iter()
            .map(|f| (f.name.as_str(), f.quantity.as_deref())),
    );

    ParsedMealCommand {
        meal_type,
        foods,
        total_calories,
    }
}

fn parse_segment(segment: &str) -> FoodItem {
    match SEGMENT_RE.captures(segment) {
        Some(caps) => FoodItem {
            name: caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            quantity: caps.get(1).map(|m| m.as_str().to_string()),
            unit: caps.get(2).map(|m| m.as_str().to_lowercase()),
        },
        // Whole segment becomes the name with quantity/unit unset
        None => FoodItem {
            name: segment.to_string(),
            quantity: None,
            unit: None,
        },
    }
}
