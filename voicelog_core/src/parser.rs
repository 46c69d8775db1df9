//! The engine's single public operation: `parse_command`.

use crate::classifier;
use crate::extract;
use crate::types::{CommandIntent, ParseResult};
use std::panic::{self, AssertUnwindSafe};

/// Turn a transcribed utterance into exactly one `ParseResult` variant.
///
/// Total for every input: classification that matches nothing yields
/// `Unknown`, an identified intent whose required value cannot be extracted
/// yields `ParseError`, and everything else yields a typed payload. The call
/// is pure and touches no shared state, so concurrent invocation needs no
/// synchronization.
pub fn parse_command(command: &str) -> ParseResult {
    // Extractors are written to be infallible or return Err, but the public
    // contract is that nothing escapes this function; a panic anywhere below
    // becomes a ParseError carrying the original text.
    let result = panic::catch_unwind(AssertUnwindSafe(|| dispatch(command)));

    result.unwrap_or_else(|_| ParseResult::ParseError {
        original_command: command.to_string(),
        error_message: "internal error while parsing command".to_string(),
    })
}

fn dispatch(command: &str) -> ParseResult {
    match classifier::classify(command) {
        CommandIntent::Water => ParseResult::Water(extract::water::extract(command)),
        CommandIntent::Weight => match extract::weight::extract(command) {
            Ok(parsed) => ParseResult::Weight(parsed),
            Err(e) => ParseResult::ParseError {
                original_command: command.to_string(),
                error_message: e.to_string(),
            },
        },
        CommandIntent::Sleep => ParseResult::Sleep(extract::sleep::extract(command)),
        CommandIntent::Mood => ParseResult::Mood(extract::mood::extract(command)),
        CommandIntent::Meditation => {
            ParseResult::Meditation(extract::meditation::extract(command))
        }
        CommandIntent::Habit => ParseResult::Habit(extract::habit::extract(command)),
        CommandIntent::Journal => ParseResult::Journal(extract::journal::extract(command)),
        CommandIntent::Supplement => {
            ParseResult::Supplement(extract::supplement::extract(command))
        }
        CommandIntent::Workout => ParseResult::Workout(extract::workout::extract(command)),
        CommandIntent::Meal => ParseResult::Meal(extract::meal::extract(command)),
        CommandIntent::Unknown => ParseResult::Unknown {
            command: command.to_string(),
        },
    }
}
