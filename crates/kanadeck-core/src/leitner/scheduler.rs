//! Leitner box transitions.
//!
//! ```text
//! correct:   T -> min(T + 1, 5)   (tier 5 re-appends to the end of tier 5)
//! incorrect: T -> 1               (tier 1 re-appends to the end of tier 1)
//! ```
//!
//! Transitions only ever apply to the current item of the selected tier.
//! Persisting the result is the caller's job.

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use super::store::{Boxes, ItemIndex};
use super::tier::Tier;

/// Recall signal for the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn target(self, from: Tier) -> Tier {
        match self {
            Outcome::Correct => from.next(),
            Outcome::Incorrect => Tier::ONE,
        }
    }
}

impl From<bool> for Outcome {
    fn from(correct: bool) -> Self {
        if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}

/// The item under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentItem {
    pub item: ItemIndex,
    pub tier: Tier,
    /// Cursor position within the tier.
    pub position: usize,
    pub tier_len: usize,
}

/// Result of applying an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub item: ItemIndex,
    pub from: Tier,
    pub to: Tier,
    /// The outcome was recorded at the last position of the tier, so every
    /// item in it has been seen once this pass. Presentation-only signal.
    pub tier_exhausted: bool,
}

pub fn current_item(boxes: &Boxes, selected: Tier, cursor: Cursor) -> Option<CurrentItem> {
    let items = boxes.items_in(selected);
    let position = super::cursor::clamp(cursor.position(), items.len());
    items.get(position).map(|&item| CurrentItem {
        item,
        tier: selected,
        position,
        tier_len: items.len(),
    })
}

/// Move the current item according to `outcome` and keep the cursor valid.
///
/// Returns `None` without touching anything when the selected tier is empty.
pub fn apply_outcome(
    boxes: &mut Boxes,
    selected: Tier,
    cursor: &mut Cursor,
    outcome: Outcome,
) -> Option<Transition> {
    let current = current_item(boxes, selected, *cursor)?;
    let to = outcome.target(selected);
    if !boxes.move_item(current.item, selected, to) {
        return None;
    }
    cursor.clamp_to(boxes.len_of(selected));
    Some(Transition {
        item: current.item,
        from: selected,
        to,
        tier_exhausted: current.position + 1 == current.tier_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread() -> Boxes {
        // tier1: [0, 1], tier3: [2, 3], tier5: [4]
        let mut boxes = Boxes::create(5);
        boxes.move_item(2, Tier::ONE, Tier::THREE);
        boxes.move_item(3, Tier::ONE, Tier::THREE);
        boxes.move_item(4, Tier::ONE, Tier::FIVE);
        boxes
    }

    #[test]
    fn correct_promotes_one_tier() {
        let mut boxes = spread();
        let mut cursor = Cursor::default();
        let t = apply_outcome(&mut boxes, Tier::THREE, &mut cursor, Outcome::Correct).unwrap();
        assert_eq!((t.item, t.from, t.to), (2, Tier::THREE, Tier::FOUR));
        assert_eq!(boxes.items_in(Tier::FOUR), &[2]);
        assert_eq!(boxes.items_in(Tier::THREE), &[3]);
    }

    #[test]
    fn correct_at_tier_five_reappends() {
        let mut boxes = Boxes::create(3);
        for i in 0..3 {
            boxes.move_item(i, Tier::ONE, Tier::FIVE);
        }
        let mut cursor = Cursor::default();
        let t = apply_outcome(&mut boxes, Tier::FIVE, &mut cursor, Outcome::Correct).unwrap();
        assert_eq!(t.to, Tier::FIVE);
        assert_eq!(boxes.items_in(Tier::FIVE), &[1, 2, 0]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn incorrect_demotes_to_tier_one() {
        let mut boxes = spread();
        let mut cursor = Cursor::default();
        cursor.advance(2);
        let t = apply_outcome(&mut boxes, Tier::THREE, &mut cursor, Outcome::Incorrect).unwrap();
        assert_eq!((t.item, t.to), (3, Tier::ONE));
        assert_eq!(boxes.items_in(Tier::ONE), &[0, 1, 3]);
        assert_eq!(boxes.len_of(Tier::THREE), 1);
        // position 1 no longer exists in tier 3
        assert_eq!(cursor.position(), 0);
        assert!(t.tier_exhausted);
    }

    #[test]
    fn incorrect_in_tier_one_moves_to_back() {
        let mut boxes = Boxes::create(3);
        let mut cursor = Cursor::default();
        apply_outcome(&mut boxes, Tier::ONE, &mut cursor, Outcome::Incorrect).unwrap();
        assert_eq!(boxes.items_in(Tier::ONE), &[1, 2, 0]);
    }

    #[test]
    fn empty_tier_is_noop() {
        let mut boxes = Boxes::create(3);
        let mut cursor = Cursor::default();
        assert!(apply_outcome(&mut boxes, Tier::TWO, &mut cursor, Outcome::Correct).is_none());
        assert_eq!(boxes, Boxes::create(3));
        assert!(current_item(&boxes, Tier::TWO, cursor).is_none());
    }

    #[test]
    fn exhausted_only_at_last_position() {
        let mut boxes = Boxes::create(3);
        let mut cursor = Cursor::default();
        let t = apply_outcome(&mut boxes, Tier::ONE, &mut cursor, Outcome::Correct).unwrap();
        assert!(!t.tier_exhausted);
        cursor.advance(boxes.len_of(Tier::ONE));
        let t = apply_outcome(&mut boxes, Tier::ONE, &mut cursor, Outcome::Correct).unwrap();
        assert!(t.tier_exhausted);
    }
}
