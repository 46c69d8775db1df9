//! Ordered intent classification rules.
//!
//! Intents overlap lexically ("drink" collides with meal language, "weight"
//! with weight training), so classification is an ordered predicate cascade:
//! the rules are evaluated top-to-bottom and the first match wins. The order
//! is a deliberate disambiguation policy, kept as inspectable data rather
//! than buried control flow so it stays reviewable and testable.
//!
//! All predicates use case-insensitive substring containment, not
//! word-boundary matching. Both pre-existing client ports behaved this way
//! ("seawater" classifies as Water); it is preserved as existing behavior.

use crate::types::CommandIntent;

/// One entry in the classification cascade
pub struct IntentRule {
    pub intent: CommandIntent,
    /// Predicate over the lowercased, trimmed utterance
    pub matches: fn(&str) -> bool,
    /// Short description of the trigger, for hosts that display the policy
    pub trigger: &'static str,
}

/// The classification cascade, in evaluation order.
///
/// Water runs first because "drink" collides with meal language; Meal runs
/// last as the deliberately narrowest catch-all so generic words like "eat"
/// cannot pre-empt other intents.
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: CommandIntent::Water,
        matches: is_water,
        trigger: "\"water\", or \"drink\" without meal language",
    },
    IntentRule {
        intent: CommandIntent::Weight,
        matches: is_weight,
        trigger: "\"weight\" or \"weigh\"",
    },
    IntentRule {
        intent: CommandIntent::Sleep,
        matches: is_sleep,
        trigger: "\"sleep\"/\"slept\", or \"bed\" with \"hours\"",
    },
    IntentRule {
        intent: CommandIntent::Mood,
        matches: is_mood,
        trigger: "\"mood\"/\"feeling\", or \"feel\" with an emotion word",
    },
    IntentRule {
        intent: CommandIntent::Meditation,
        matches: is_meditation,
        trigger: "\"meditation\"/\"meditate\"/\"mindfulness\"",
    },
    IntentRule {
        intent: CommandIntent::Habit,
        matches: is_habit,
        trigger: "\"complete\" with \"habit\"/\"task\"/\"done\"",
    },
    IntentRule {
        intent: CommandIntent::Journal,
        matches: is_journal,
        trigger: "\"journal\", \"write about\", or \"log thought\"",
    },
    IntentRule {
        intent: CommandIntent::Supplement,
        matches: is_supplement,
        trigger: "\"supplement\"/\"vitamin\"/\"mineral\", or \"add\" with a pill word",
    },
    IntentRule {
        intent: CommandIntent::Workout,
        matches: is_workout,
        trigger: "any exercise word (workout, run, gym, ...)",
    },
    IntentRule {
        intent: CommandIntent::Meal,
        matches: is_meal,
        trigger: "\"log\" with a meal word (breakfast, eat, food, ...)",
    },
];

/// Classify an utterance into exactly one intent.
///
/// Never fails; absence of any match yields `Unknown`.
pub fn classify(command: &str) -> CommandIntent {
    let lowered = command.trim().to_lowercase();

    for rule in INTENT_RULES {
        if (rule.matches)(&lowered) {
            tracing::debug!(intent = rule.intent.name(), "classified command");
            return rule.intent;
        }
    }

    tracing::debug!("no intent rule matched");
    CommandIntent::Unknown
}

fn is_water(text: &str) -> bool {
    text.contains("water")
        || (text.contains("drink") && !text.contains("meal") && !text.contains("eat"))
}

fn is_weight(text: &str) -> bool {
    text.contains("weight") || text.contains("weigh")
}

fn is_sleep(text: &str) -> bool {
    text.contains("sleep")
        || text.contains("slept")
        || (text.contains("bed") && text.contains("hours"))
}

fn is_mood(text: &str) -> bool {
    const FEEL_WORDS: &[&str] = &["happy", "sad", "angry", "anxious", "stressed"];
    text.contains("mood")
        || text.contains("feeling")
        || (text.contains("feel") && FEEL_WORDS.iter().any(|w| text.contains(w)))
}

fn is_meditation(text: &str) -> bool {
    text.contains("meditation") || text.contains("meditate") || text.contains("mindfulness")
}

fn is_habit(text: &str) -> bool {
    text.contains("complete")
        && (text.contains("habit") || text.contains("task") || text.contains("done"))
}

fn is_journal(text: &str) -> bool {
    text.contains("journal")
        || text.contains("journaling")
        || (text.contains("write") && text.contains("about"))
        || (text.contains("log") && text.contains("thought"))
}

fn is_supplement(text: &str) -> bool {
    const PILL_WORDS: &[&str] = &["pill", "capsule", "tablet"];
    text.contains("supplement")
        || text.contains("vitamin")
        || text.contains("mineral")
        || (text.contains("add") && PILL_WORDS.iter().any(|w| text.contains(w)))
}

fn is_workout(text: &str) -> bool {
    const EXERCISE_WORDS: &[&str] = &[
        "workout", "exercise", "run", "walk", "bike", "swim", "lift", "gym",
    ];
    EXERCISE_WORDS.iter().any(|w| text.contains(w))
}

fn is_meal(text: &str) -> bool {
    const MEAL_WORDS: &[&str] = &[
        "breakfast", "lunch", "dinner", "snack", "meal", "eat", "ate", "food",
    ];
    text.contains("log") && MEAL_WORDS.iter().any(|w| text.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_beats_meal() {
        // Water runs before Meal; meal-exclusion does not apply because
        // "water" is explicitly present.
        assert_eq!(classify("log water with my meal"), CommandIntent::Water);
    }

    #[test]
    fn test_drink_without_meal_language_is_water() {
        assert_eq!(classify("drink 16 oz"), CommandIntent::Water);
        // "drink" next to meal language is excluded, so Meal catches it
        assert_eq!(classify("log a drink with my meal"), CommandIntent::Meal);
    }

    #[test]
    fn test_weight() {
        assert_eq!(classify("log my weight 150 lbs"), CommandIntent::Weight);
        assert_eq!(classify("I weigh 70 kg"), CommandIntent::Weight);
    }

    #[test]
    fn test_weight_beats_weight_training() {
        // "weight training" contains "weight"; the cascade order makes this
        // a Weight command, matching both legacy clients.
        assert_eq!(classify("log weight training"), CommandIntent::Weight);
    }

    #[test]
    fn test_sleep() {
        assert_eq!(classify("I slept 8 hours"), CommandIntent::Sleep);
        assert_eq!(classify("went to bed for 7 hours"), CommandIntent::Sleep);
    }

    #[test]
    fn test_mood() {
        assert_eq!(classify("my mood is 4"), CommandIntent::Mood);
        assert_eq!(classify("I feel anxious"), CommandIntent::Mood);
        assert_eq!(classify("feeling great today"), CommandIntent::Mood);
    }

    #[test]
    fn test_meditation() {
        assert_eq!(classify("meditate for 20 minutes"), CommandIntent::Meditation);
        assert_eq!(classify("mindfulness session"), CommandIntent::Meditation);
    }

    #[test]
    fn test_habit() {
        assert_eq!(classify("complete habit morning run"), CommandIntent::Habit);
        assert_eq!(classify("complete my reading task"), CommandIntent::Habit);
    }

    #[test]
    fn test_journal() {
        assert_eq!(classify("journal about my day"), CommandIntent::Journal);
        assert_eq!(classify("write about the trip"), CommandIntent::Journal);
        assert_eq!(classify("log a thought"), CommandIntent::Journal);
    }

    #[test]
    fn test_supplement() {
        assert_eq!(classify("take vitamin d"), CommandIntent::Supplement);
        assert_eq!(classify("add a calcium pill"), CommandIntent::Supplement);
    }

    #[test]
    fn test_workout() {
        assert_eq!(classify("went for a run"), CommandIntent::Workout);
        assert_eq!(classify("gym session 45 minutes"), CommandIntent::Workout);
    }

    #[test]
    fn test_meal_is_last_resort() {
        assert_eq!(classify("log 2 eggs for breakfast"), CommandIntent::Meal);
        // "eat" alone without "log" is not enough
        assert_eq!(classify("I want to eat"), CommandIntent::Unknown);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(""), CommandIntent::Unknown);
        assert_eq!(classify("what is the weather"), CommandIntent::Unknown);
        assert_eq!(classify("12345 !!!"), CommandIntent::Unknown);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        // Substring, not word-boundary, matching is the documented policy.
        assert_eq!(classify("seawater sample"), CommandIntent::Water);
    }

    #[test]
    fn test_rule_order_matches_policy() {
        let order: Vec<_> = INTENT_RULES.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                CommandIntent::Water,
                CommandIntent::Weight,
                CommandIntent::Sleep,
                CommandIntent::Mood,
                CommandIntent::Meditation,
                CommandIntent::Habit,
                CommandIntent::Journal,
                CommandIntent::Supplement,
                CommandIntent::Workout,
                CommandIntent::Meal,
            ]
        );
    }
}
