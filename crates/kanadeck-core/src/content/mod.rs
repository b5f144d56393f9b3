//! Item sets the scheduler works over.
//!
//! Letters come from two fixed kana tables; sentences are loaded per
//! curriculum day from a [`SentenceSource`].

mod kana;
mod kana_tables;
mod sentences;
mod source;

pub use kana::{Kana, KanaType, KANA_COUNT};
pub use sentences::{fallback_sentences, DayContent, Sentence, Word};
pub use source::{load_day_or_fallback, ContentSource, DirectorySource, HttpSource, SentenceSource};

use crate::error::ValidationError;

/// Check a curriculum day against `1..=days`.
pub fn validate_day(day: u32, days: u32) -> Result<u32, ValidationError> {
    if (1..=days).contains(&day) {
        Ok(day)
    } else {
        Err(ValidationError::DayOutOfRange { day, max: days })
    }
}
