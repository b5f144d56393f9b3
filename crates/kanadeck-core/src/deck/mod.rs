//! Domain controllers: each owns the tier state of one scheduling domain and
//! writes it through a [`ProgressStore`](crate::storage::ProgressStore)
//! after every change.

mod letters;
mod record;
mod sentences;

pub use letters::{KanaBoxes, LettersDeck};
pub use sentences::{LoadTicket, SentenceDeck};
