//! Sentence study deck. Every curriculum day is an independent scheduling
//! domain with its own stored record; the deck holds at most one of them.
//!
//! Loading a day is the only asynchronous step. Each load is tagged with a
//! generation number and a completion is applied only if no newer load was
//! started in the meantime:
//!
//! ```ignore
//! let ticket = deck.begin_load(5)?;          // deck is now not ready
//! let content = load_day_or_fallback(&source, 5).await;
//! deck.finish_load(ticket, content)?;        // false if superseded
//! ```
//!
//! A day shown on the built-in sample is practice only: its progress is
//! never read or written, so stored progress survives a content outage.

use chrono::Utc;

use super::record::{field, parse_raw, SentenceRecord};
use crate::content::{load_day_or_fallback, validate_day, DayContent, Sentence, SentenceSource};
use crate::error::Result;
use crate::leitner::{
    apply_outcome, current_item, reconcile_boxes, reconcile_selected, CurrentItem, Cursor, Outcome,
    Tier, TierCounts, TierStore, Transition,
};
use crate::storage::{keys, ProgressStore};

/// Identifies one in-flight day load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub day: u32,
    generation: u64,
}

#[derive(Debug)]
struct ActiveDay {
    day: u32,
    sentences: Vec<Sentence>,
    fallback: bool,
    tiers: TierStore,
    cursor: Cursor,
}

/// Domain controller for the per-day sentence decks.
pub struct SentenceDeck<S: ProgressStore> {
    store: S,
    days: u32,
    generation: u64,
    active: Option<ActiveDay>,
}

impl<S: ProgressStore> SentenceDeck<S> {
    /// A deck with no day loaded. `days` bounds the curriculum (1..=days).
    pub fn new(store: S, days: u32) -> Self {
        Self {
            store,
            days,
            generation: 0,
            active: None,
        }
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Start switching to `day`. The current day is dropped right away and
    /// every earlier ticket becomes stale.
    pub fn begin_load(&mut self, day: u32) -> Result<LoadTicket> {
        let day = validate_day(day, self.days)?;
        self.generation += 1;
        self.active = None;
        Ok(LoadTicket {
            day,
            generation: self.generation,
        })
    }

    /// Apply loaded content for `ticket`. Returns `Ok(false)` and changes
    /// nothing when a newer load has started since.
    pub fn finish_load(&mut self, ticket: LoadTicket, content: DayContent) -> Result<bool> {
        if ticket.generation != self.generation || content.day != ticket.day {
            tracing::debug!(
                day = ticket.day,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale day load"
            );
            return Ok(false);
        }

        let item_count = content.sentences.len();
        let mut active = ActiveDay {
            day: ticket.day,
            sentences: content.sentences,
            fallback: content.fallback,
            tiers: TierStore::create(item_count),
            cursor: Cursor::default(),
        };
        if !active.fallback {
            let key = keys::sentences_day(ticket.day);
            let record = parse_raw(self.store.load(&key)?);
            let record = record.as_ref();
            let reconciled = reconcile_boxes(field(record, "tiers"), item_count);
            match reconciled.reset {
                None => {
                    let selected = record.and_then(|r| r.get("selectedTier"));
                    active.tiers = TierStore {
                        boxes: reconciled.value,
                        selected_tier: reconcile_selected(selected),
                    };
                }
                Some(reason) => {
                    tracing::info!(key = %key, %reason, "sentence progress reset");
                    persist_day(&self.store, &active)?;
                }
            }
        }
        self.active = Some(active);
        Ok(true)
    }

    /// Load `day` from `source` (falling back to the built-in sample) and
    /// make it the active day.
    pub async fn switch_day<C: SentenceSource>(&mut self, day: u32, source: &C) -> Result<bool> {
        let ticket = self.begin_load(day)?;
        let content = load_day_or_fallback(source, ticket.day).await;
        self.finish_load(ticket, content)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_ready(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_day(&self) -> Option<u32> {
        self.active.as_ref().map(|a| a.day)
    }

    /// Whether the active day is showing the built-in sample.
    pub fn is_fallback(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.fallback)
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn selected_tier(&self) -> Option<Tier> {
        self.active.as_ref().map(|a| a.tiers.selected_tier)
    }

    pub fn tier_store(&self) -> Option<&TierStore> {
        self.active.as_ref().map(|a| &a.tiers)
    }

    pub fn current_item(&self) -> Option<CurrentItem> {
        let active = self.active.as_ref()?;
        current_item(&active.tiers.boxes, active.tiers.selected_tier, active.cursor)
    }

    pub fn current_sentence(&self) -> Option<(CurrentItem, &Sentence)> {
        let current = self.current_item()?;
        let sentence = self.active.as_ref()?.sentences.get(current.item)?;
        Some((current, sentence))
    }

    /// Per-tier counts of the active day; all zero while not ready.
    pub fn progress_by_tier(&self) -> TierCounts {
        self.active
            .as_ref()
            .map(|a| a.tiers.boxes.count_per_tier())
            .unwrap_or_default()
    }

    // ── Commands (no-ops until a day is loaded) ──────────────────────

    pub fn select_tier(&mut self, tier: Tier) -> Result<()> {
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };
        active.tiers.selected_tier = tier;
        active.cursor.reset();
        persist_day(&self.store, active)
    }

    pub fn record_outcome(&mut self, outcome: Outcome) -> Result<Option<Transition>> {
        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };
        let selected = active.tiers.selected_tier;
        let Some(transition) =
            apply_outcome(&mut active.tiers.boxes, selected, &mut active.cursor, outcome)
        else {
            return Ok(None);
        };
        tracing::debug!(
            day = active.day,
            item = transition.item,
            from = %transition.from,
            to = %transition.to,
            "sentence moved"
        );
        persist_day(&self.store, active)?;
        Ok(Some(transition))
    }

    pub fn advance_cursor(&mut self) {
        if let Some(active) = self.active.as_mut() {
            let len = active.tiers.selected_items().len();
            active.cursor.advance(len);
        }
    }

    pub fn retreat_cursor(&mut self) {
        if let Some(active) = self.active.as_mut() {
            let len = active.tiers.selected_items().len();
            active.cursor.retreat(len);
        }
    }

    /// Put every sentence of the active day back in tier 1.
    pub fn reset_domain(&mut self) -> Result<()> {
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };
        active.tiers = TierStore::create(active.sentences.len());
        active.cursor.reset();
        tracing::info!(day = active.day, "sentence progress reset by user");
        persist_day(&self.store, active)
    }
}

fn persist_day<S: ProgressStore>(store: &S, active: &ActiveDay) -> Result<()> {
    if active.fallback {
        return Ok(());
    }
    let record = SentenceRecord {
        tiers: &active.tiers.boxes,
        selected_tier: active.tiers.selected_tier,
        updated_at: Utc::now(),
    };
    store.save(&keys::sentences_day(active.day), &serde_json::to_string(&record)?)
}
