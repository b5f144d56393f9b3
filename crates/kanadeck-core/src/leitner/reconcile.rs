//! Validation of persisted progress against the live item count.
//!
//! Stored progress can go stale when the content behind it changes (a day's
//! sentence file is edited, a character list is extended). Partial repair
//! cannot know where new items belong, so anything that is not an exact
//! partition of the current item range is replaced with a fresh store.

use std::fmt;

use serde_json::Value;

use super::store::{Boxes, ItemIndex};
use super::tier::{Tier, TIER_COUNT};

/// Why a candidate was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// Nothing was stored yet.
    Missing,
    /// Stored value is not five arrays of item indices.
    Malformed,
    /// Tier lengths do not add up to the item count.
    CountMismatch { stored: usize, expected: usize },
    /// Lengths match but some index is duplicated or out of range.
    NotPartition,
}

impl fmt::Display for ResetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetReason::Missing => write!(f, "no stored progress"),
            ResetReason::Malformed => write!(f, "stored progress is malformed"),
            ResetReason::CountMismatch { stored, expected } => {
                write!(f, "stored progress covers {stored} items, expected {expected}")
            }
            ResetReason::NotPartition => write!(f, "stored progress has duplicate or unknown items"),
        }
    }
}

/// Outcome of reconciling one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled<T> {
    pub value: T,
    /// Set when the candidate was discarded; the caller must persist `value`.
    pub reset: Option<ResetReason>,
}

impl<T> Reconciled<T> {
    pub fn was_reset(&self) -> bool {
        self.reset.is_some()
    }
}

/// Accept `candidate` as the tier lists for a domain of `item_count` items,
/// or fall back to `Boxes::create(item_count)`.
pub fn reconcile_boxes(candidate: Option<&Value>, item_count: usize) -> Reconciled<Boxes> {
    let fresh = |reason| Reconciled {
        value: Boxes::create(item_count),
        reset: Some(reason),
    };

    let Some(candidate) = candidate else {
        return fresh(ResetReason::Missing);
    };
    let Some(boxes) = parse_tiers(candidate) else {
        return fresh(ResetReason::Malformed);
    };
    let stored = boxes.total();
    if stored != item_count {
        return fresh(ResetReason::CountMismatch {
            stored,
            expected: item_count,
        });
    }
    if !boxes.is_partition_of(item_count) {
        return fresh(ResetReason::NotPartition);
    }
    Reconciled {
        value: boxes,
        reset: None,
    }
}

/// Read a stored `selectedTier`. Anything missing or out of range selects
/// tier 1; the tier placement itself is unaffected.
pub fn reconcile_selected(candidate: Option<&Value>) -> Tier {
    candidate
        .and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok())
        .and_then(Tier::new)
        .unwrap_or_default()
}

fn parse_tiers(value: &Value) -> Option<Boxes> {
    let tiers = value.as_array()?;
    if tiers.len() != TIER_COUNT {
        return None;
    }
    let mut parsed: [Vec<ItemIndex>; TIER_COUNT] = Default::default();
    for (slot, tier) in parsed.iter_mut().zip(tiers) {
        *slot = tier
            .as_array()?
            .iter()
            .map(|item| item.as_u64().and_then(|n| usize::try_from(n).ok()))
            .collect::<Option<Vec<_>>>()?;
    }
    Some(Boxes::from_tiers(parsed))
}
