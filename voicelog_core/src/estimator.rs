//! Keyword lookup tables for calorie and micronutrient estimation.
//!
//! These tables are deliberately plain ordered data rather than control flow
//! so they can be reviewed, tested, and extended independently. They are used
//! only when the utterance carries no explicit nutrition data.

/// Per-unit calorie estimates, matched by substring against a food name.
///
/// First matching entry wins, so more specific keywords must come first.
pub static CALORIE_TABLE: &[(&str, f64)] = &[
    ("egg", 70.0),
    ("toast", 80.0),
    ("bread", 80.0),
    ("coffee", 5.0),
    ("apple", 95.0),
    ("banana", 105.0),
    ("rice", 130.0),
    ("pasta", 130.0),
    ("chicken", 165.0),
    ("meat", 165.0),
    ("fish", 120.0),
];

/// Micronutrient keywords, matched by substring against the whole utterance.
pub static NUTRIENT_TABLE: &[(&str, &str)] = &[
    ("vitamin d", "vitamin_d"),
    ("vitamin c", "vitamin_c"),
    ("calcium", "calcium"),
    ("iron", "iron"),
    ("magnesium", "magnesium"),
    ("zinc", "zinc"),
];

/// Per-unit calorie estimate for a food name, if any keyword matches
pub fn calories_per_unit(food_name: &str) -> Option<f64> {
    let name = food_name.to_lowercase();
    CALORIE_TABLE
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, kcal)| *kcal)
}

/// Estimate total calories for a set of (name, quantity) pairs.
///
/// Quantity is the user's free text; anything unparseable counts as 1.0.
/// Returns `None` unless at least one food matched the keyword table, so
/// that absence of an estimate is distinguishable from a zero estimate.
pub fn estimate_total_calories<'a, I>(foods: I) -> Option<u32>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut total = 0.0;
    let mut any_matched = false;

    for (name, quantity) in foods {
        if let Some(kcal) = calories_per_unit(name) {
            let multiplier = quantity
                .and_then(|q| q.trim().parse::<f64>().ok())
                .unwrap_or(1.0);
            total += kcal * multiplier;
            any_matched = true;
        }
    }

    if any_matched {
        Some(crate::units::round_half_up(total))
    } else {
        None
    }
}

/// Map a recognized micronutrient keyword in `text` to its nutrient id
pub fn nutrient_ids_in(text: &str) -> Vec<&'static str> {
    let text = text.to_lowercase();
    NUTRIENT_TABLE
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, id)| *id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_per_unit() {
        assert_eq!(calories_per_unit("eggs"), Some(70.0));
        assert_eq!(calories_per_unit("scrambled EGGS"), Some(70.0));
        assert_eq!(calories_per_unit("rice"), Some(130.0));
        assert_eq!(calories_per_unit("quinoa"), None);
    }

    #[test]
    fn test_estimate_sums_across_foods() {
        let foods = vec![("eggs", Some("2")), ("rice", Some("1"))];
        assert_eq!(estimate_total_calories(foods), Some(270));
    }

    #[test]
    fn test_estimate_defaults_quantity_to_one() {
        let foods = vec![("banana", None)];
        assert_eq!(estimate_total_calories(foods), Some(105));
    }

    #[test]
    fn test_estimate_unparseable_quantity_counts_as_one() {
        let foods = vec![("apple", Some("a few"))];
        assert_eq!(estimate_total_calories(foods), Some(95));
    }

    #[test]
    fn test_no_match_yields_absence_not_zero() {
        let foods = vec![("quinoa", Some("2")), ("tofu", None)];
        assert_eq!(estimate_total_calories(foods), None);
    }

    #[test]
    fn test_partial_match_still_estimates() {
        let foods = vec![("quinoa", Some("2")), ("eggs", Some("3"))];
        assert_eq!(estimate_total_calories(foods), Some(210));
    }

    #[test]
    fn test_nutrient_ids() {
        assert_eq!(nutrient_ids_in("take vitamin d daily"), vec!["vitamin_d"]);
        assert_eq!(nutrient_ids_in("Calcium and IRON"), vec!["calcium", "iron"]);
        assert!(nutrient_ids_in("fish oil").is_empty());
    }
}
