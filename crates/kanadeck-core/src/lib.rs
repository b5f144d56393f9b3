//! # Kanadeck Core Library
//!
//! This library provides the core logic for Kanadeck, a Leitner-box flashcard
//! trainer for Japanese letters and example sentences. As in a CLI-first design,
//! every operation is available from the standalone `kanadeck` binary, which is
//! a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Leitner engine**: five ordered tiers per scheduling domain, a cursor into
//!   the selected tier, and the correct/incorrect transition rules
//! - **Reconciliation**: stored progress is checked against the live item count
//!   and replaced with a fresh store when it no longer fits
//! - **Storage**: SQLite key/value records and TOML-based configuration
//! - **Content**: built-in kana tables and per-day sentence sources
//!   (local directory or HTTP) with a built-in fallback sample
//!
//! ## Key Components
//!
//! - [`LettersDeck`]: hiragana/katakana study controller
//! - [`SentenceDeck`]: per-day sentence study controller
//! - [`Database`]: progress persistence
//! - [`Config`]: application configuration management

pub mod content;
pub mod deck;
pub mod error;
pub mod leitner;
pub mod storage;

pub use content::{ContentSource, DayContent, Kana, KanaType, Sentence, SentenceSource};
pub use deck::{KanaBoxes, LettersDeck, LoadTicket, SentenceDeck};
pub use error::{ConfigError, ContentError, CoreError, DatabaseError, ValidationError};
pub use leitner::{CurrentItem, Outcome, Tier, TierCounts, TierStore, Transition};
pub use storage::{Config, Database, MemoryStore, ProgressStore};
