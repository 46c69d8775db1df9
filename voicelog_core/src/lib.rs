#![forbid(unsafe_code)]

//! Core parsing engine for the Voicelog health-command system.
//!
//! This crate provides:
//! - Intent classification (ordered predicate cascade)
//! - Per-intent extractors (meal, water, workout, sleep, ...)
//! - Unit normalization (ml, minutes, lbs/kg)
//! - Calorie and micronutrient estimation tables
//!
//! The engine is a pure function from text to structured data: no I/O, no
//! persistence, no shared mutable state. Hosts (CLI, mobile clients) consume
//! the `ParseResult` and own everything downstream.

pub mod classifier;
pub mod config;
pub mod error;
pub mod estimator;
pub mod extract;
pub mod logging;
pub mod parser;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use classifier::{classify, IntentRule, INTENT_RULES};
pub use config::Config;
pub use error::{Error, Result};
pub use parser::parse_command;
pub use types::*;
