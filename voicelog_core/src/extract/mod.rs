//! Intent extractors, one module per intent.
//!
//! Each extractor consumes the raw utterance (plus the unit and estimator
//! helpers) and produces its typed payload. Apart from weight, every
//! extractor is infallible: missing information becomes an absent optional
//! field, never an error.

pub mod habit;
pub mod journal;
pub mod meal;
pub mod meditation;
pub mod mood;
pub mod sleep;
pub mod supplement;
pub mod water;
pub mod weight;
pub mod workout;
