mod cursor;
mod reconcile;
mod scheduler;
mod store;
mod tier;

pub use cursor::{clamp, Cursor};
pub use reconcile::{reconcile_boxes, reconcile_selected, Reconciled, ResetReason};
pub use scheduler::{apply_outcome, current_item, CurrentItem, Outcome, Transition};
pub use store::{Boxes, ItemIndex, TierCounts, TierStore};
pub use tier::{Tier, TIER_COUNT};
