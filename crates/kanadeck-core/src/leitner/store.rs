//! The five-box partition of a scheduling domain.
//!
//! `Boxes` holds the item indices of every tier. Order within a tier is the
//! order items entered it, oldest first. `TierStore` adds the tier currently
//! being studied.

use serde::{Deserialize, Serialize};

use super::tier::{Tier, TIER_COUNT};

/// Stable index into an externally supplied item sequence.
pub type ItemIndex = usize;

/// Item count per tier, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierCounts(pub [usize; TIER_COUNT]);

impl TierCounts {
    pub fn get(&self, tier: Tier) -> usize {
        self.0[tier.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, usize)> + '_ {
        Tier::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

/// Five ordered tiers that together partition `[0, item_count)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boxes([Vec<ItemIndex>; TIER_COUNT]);

impl Boxes {
    /// Fresh partition: every item in tier 1 in ascending order.
    pub fn create(item_count: usize) -> Self {
        Self([(0..item_count).collect(), Vec::new(), Vec::new(), Vec::new(), Vec::new()])
    }

    /// Wrap raw tier lists without validation. Use the reconciler for
    /// anything read from storage.
    pub(crate) fn from_tiers(tiers: [Vec<ItemIndex>; TIER_COUNT]) -> Self {
        Self(tiers)
    }

    pub fn items_in(&self, tier: Tier) -> &[ItemIndex] {
        &self.0[tier.index()]
    }

    pub fn len_of(&self, tier: Tier) -> usize {
        self.0[tier.index()].len()
    }

    /// Remove the first occurrence of `item` from `from` and append it to
    /// `to`. Returns `false` and leaves the boxes untouched when the item is
    /// not in `from`.
    pub fn move_item(&mut self, item: ItemIndex, from: Tier, to: Tier) -> bool {
        let source = &mut self.0[from.index()];
        let Some(pos) = source.iter().position(|&i| i == item) else {
            return false;
        };
        source.remove(pos);
        self.0[to.index()].push(item);
        true
    }

    pub fn count_per_tier(&self) -> TierCounts {
        TierCounts(std::array::from_fn(|i| self.0[i].len()))
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Whether every index in `[0, item_count)` appears exactly once.
    pub fn is_partition_of(&self, item_count: usize) -> bool {
        if self.total() != item_count {
            return false;
        }
        let mut seen = vec![false; item_count];
        for &item in self.0.iter().flatten() {
            match seen.get_mut(item) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

/// Tier partition plus the tier currently selected for study.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierStore {
    pub boxes: Boxes,
    pub selected_tier: Tier,
}

impl TierStore {
    pub fn create(item_count: usize) -> Self {
        Self {
            boxes: Boxes::create(item_count),
            selected_tier: Tier::ONE,
        }
    }

    pub fn selected_items(&self) -> &[ItemIndex] {
        self.boxes.items_in(self.selected_tier)
    }
}
