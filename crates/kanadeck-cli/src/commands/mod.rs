pub mod completions;
pub mod config;
pub mod deck;
pub mod letters;
pub mod sentences;
pub mod study;
