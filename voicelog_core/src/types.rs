//! Core domain types for the Voicelog command engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Command intents (the coarse category assigned to an utterance)
//! - Per-intent payloads with their structured parameters
//! - The `ParseResult` tagged union returned by the engine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Intent Types
// ============================================================================

/// The coarse category assigned to an utterance by the classifier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CommandIntent {
    Meal,
    Supplement,
    Workout,
    Water,
    Weight,
    Sleep,
    Mood,
    Meditation,
    Habit,
    Journal,
    Unknown,
}

impl CommandIntent {
    /// Human-readable name, used by hosts when displaying classification order
    pub fn name(&self) -> &'static str {
        match self {
            CommandIntent::Meal => "meal",
            CommandIntent::Supplement => "supplement",
            CommandIntent::Workout => "workout",
            CommandIntent::Water => "water",
            CommandIntent::Weight => "weight",
            CommandIntent::Sleep => "sleep",
            CommandIntent::Mood => "mood",
            CommandIntent::Meditation => "meditation",
            CommandIntent::Habit => "habit",
            CommandIntent::Journal => "journal",
            CommandIntent::Unknown => "unknown",
        }
    }
}

// ============================================================================
// Payload Types
// ============================================================================

/// A single food item within a meal command
///
/// Quantity is kept as the user's free text (not pre-parsed to a number)
/// because display fidelity matters; numeric parsing happens only inside
/// the calorie estimator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub name: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

/// Parsed meal logging command
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedMealCommand {
    /// One of breakfast/lunch/dinner/snack, when stated
    pub meal_type: Option<String>,
    pub foods: Vec<FoodItem>,
    /// Estimated total, present only when at least one food matched the
    /// estimator's keyword table (absence, not zero)
    pub total_calories: Option<u32>,
}

/// Parsed supplement logging command
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedSupplementCommand {
    pub name: String,
    /// Raw quantity text as spoken, e.g. "1000 iu"
    pub quantity: Option<String>,
    /// Recognized micronutrients mapped to their dose value
    pub nutrients: HashMap<String, f64>,
}

/// Parsed workout logging command; every field independently optional
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedWorkoutCommand {
    pub workout_type: String,
    /// Canonical minutes (hours are converted)
    pub duration_minutes: Option<u32>,
    pub distance: Option<f64>,
    /// One of miles/km/meters when a distance is present
    pub distance_unit: Option<String>,
    pub calories_burned: Option<u32>,
}

/// Parsed water intake command, always in canonical millilitres
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedWaterCommand {
    pub amount_ml: u32,
}

/// Parsed weight check-in command
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedWeightCommand {
    pub weight: f64,
    /// Canonical unit, always "lbs" or "kg"
    pub unit: String,
}

/// Parsed sleep logging command
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedSleepCommand {
    pub hours: Option<f64>,
    /// One of poor/fair/good/excellent, when stated
    pub quality: Option<String>,
}

/// Parsed mood check-in command
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedMoodCommand {
    /// Always in 1..=5
    pub level: u8,
    /// Every recognized emotion word, in vocabulary order
    pub emotions: Vec<String>,
}

/// Parsed meditation logging command
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedMeditationCommand {
    pub duration_minutes: u32,
    /// e.g. "guided", "body_scan", "loving_kindness"
    pub meditation_type: String,
}

/// Parsed habit completion command
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedHabitCommand {
    pub habit_name: String,
    pub notes: Option<String>,
}

/// Parsed journal entry command
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParsedJournalCommand {
    /// Never empty; falls back to the original command text
    pub content: String,
    /// Free-text mood word (happy/sad/anxious/...), distinct from the
    /// 1-5 mood scale
    pub mood: Option<String>,
}

// ============================================================================
// Result Type
// ============================================================================

/// The engine's one-shot, side-effect-free result value
///
/// Exactly one variant is produced per `parse_command` call. `ParseError`
/// means an intent was positively identified but a required value could not
/// be extracted; `Unknown` means no intent predicate matched at all.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum ParseResult {
    Meal(ParsedMealCommand),
    Supplement(ParsedSupplementCommand),
    Workout(ParsedWorkoutCommand),
    Water(ParsedWaterCommand),
    Weight(ParsedWeightCommand),
    Sleep(ParsedSleepCommand),
    Mood(ParsedMoodCommand),
    Meditation(ParsedMeditationCommand),
    Habit(ParsedHabitCommand),
    Journal(ParsedJournalCommand),
    ParseError {
        original_command: String,
        error_message: String,
    },
    Unknown {
        command: String,
    },
}

impl ParseResult {
    /// True for the two terminal variants that carry no loggable payload
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ParseResult::ParseError { .. } | ParseResult::Unknown { .. }
        )
    }
}
