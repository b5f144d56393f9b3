//! Letters study deck: one tier partition per kana type, one shared
//! selected tier, persisted together under a single key.

use chrono::Utc;
use serde_json::Value;

use super::record::{field, parse_raw, KanaTiers, LettersRecord, NULL};
use crate::content::{Kana, KanaType};
use crate::error::Result;
use crate::leitner::{
    apply_outcome, current_item, reconcile_boxes, reconcile_selected, Boxes, CurrentItem, Cursor,
    Outcome, Tier, TierCounts, Transition,
};
use crate::storage::{keys, ProgressStore};

/// Tier partitions of both alphabets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaBoxes {
    pub hiragana: Boxes,
    pub katakana: Boxes,
}

impl KanaBoxes {
    pub fn create() -> Self {
        Self {
            hiragana: Boxes::create(KanaType::Hiragana.item_count()),
            katakana: Boxes::create(KanaType::Katakana.item_count()),
        }
    }

    pub fn get(&self, kana: KanaType) -> &Boxes {
        match kana {
            KanaType::Hiragana => &self.hiragana,
            KanaType::Katakana => &self.katakana,
        }
    }

    pub fn get_mut(&mut self, kana: KanaType) -> &mut Boxes {
        match kana {
            KanaType::Hiragana => &mut self.hiragana,
            KanaType::Katakana => &mut self.katakana,
        }
    }
}

/// Domain controller for the letters.
pub struct LettersDeck<S: ProgressStore> {
    store: S,
    default_kana: KanaType,
    kana_type: KanaType,
    boxes: KanaBoxes,
    selected_tier: Tier,
    cursor: Cursor,
}

impl<S: ProgressStore> LettersDeck<S> {
    /// Load and reconcile stored letter progress.
    pub fn open(store: S) -> Result<Self> {
        Self::open_with(store, KanaType::default())
    }

    /// Like [`open`](Self::open), with the kana type used when nothing
    /// valid is stored and after a reset.
    pub fn open_with(store: S, default_kana: KanaType) -> Result<Self> {
        let record = parse_raw(store.load(keys::LETTERS)?);
        let record = record.as_ref();

        // A missing or non-object tier map means nothing in the record can
        // be trusted: start over from the defaults.
        let tiers = field(record, "tiers");
        if !tiers.is_some_and(Value::is_object) {
            let reason = if record.is_none() {
                "no stored progress"
            } else {
                "tier map is malformed"
            };
            tracing::info!(key = keys::LETTERS, reason, "letter progress reset");
            let deck = Self {
                store,
                default_kana,
                kana_type: default_kana,
                boxes: KanaBoxes::create(),
                selected_tier: Tier::ONE,
                cursor: Cursor::default(),
            };
            deck.persist()?;
            return Ok(deck);
        }

        // A stale alphabet resets alone and keeps the shared selection.
        let mut reset = false;
        let mut reconcile = |kana: KanaType| {
            let candidate = tiers.map(|t| t.get(kana.as_str()).unwrap_or(&NULL));
            let result = reconcile_boxes(candidate, kana.item_count());
            if let Some(reason) = result.reset {
                reset = true;
                tracing::info!(key = keys::LETTERS, kana = %kana, %reason, "letter progress reset");
            }
            result.value
        };
        let boxes = KanaBoxes {
            hiragana: reconcile(KanaType::Hiragana),
            katakana: reconcile(KanaType::Katakana),
        };

        let kana_type = record
            .and_then(|r| r.get("kanaType"))
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or(default_kana);

        let deck = Self {
            store,
            default_kana,
            kana_type,
            boxes,
            selected_tier: reconcile_selected(record.and_then(|r| r.get("selectedTier"))),
            cursor: Cursor::default(),
        };
        if reset {
            deck.persist()?;
        }
        Ok(deck)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn kana_type(&self) -> KanaType {
        self.kana_type
    }

    pub fn selected_tier(&self) -> Tier {
        self.selected_tier
    }

    pub fn boxes(&self) -> &KanaBoxes {
        &self.boxes
    }

    pub fn current_item(&self) -> Option<CurrentItem> {
        current_item(self.boxes.get(self.kana_type), self.selected_tier, self.cursor)
    }

    pub fn current_kana(&self) -> Option<(CurrentItem, Kana)> {
        let current = self.current_item()?;
        let kana = self.kana_type.get(current.item)?;
        Some((current, kana))
    }

    pub fn progress_by_tier(&self) -> TierCounts {
        self.boxes.get(self.kana_type).count_per_tier()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn select_tier(&mut self, tier: Tier) -> Result<()> {
        self.selected_tier = tier;
        self.cursor.reset();
        self.persist()
    }

    pub fn set_kana_type(&mut self, kana: KanaType) -> Result<()> {
        self.kana_type = kana;
        self.cursor.reset();
        self.persist()
    }

    /// Apply a recall outcome to the current item. `Ok(None)` when the
    /// selected tier is empty.
    pub fn record_outcome(&mut self, outcome: Outcome) -> Result<Option<Transition>> {
        let boxes = self.boxes.get_mut(self.kana_type);
        let Some(transition) = apply_outcome(boxes, self.selected_tier, &mut self.cursor, outcome)
        else {
            return Ok(None);
        };
        tracing::debug!(
            kana = %self.kana_type,
            item = transition.item,
            from = %transition.from,
            to = %transition.to,
            "letter moved"
        );
        self.persist()?;
        Ok(Some(transition))
    }

    pub fn advance_cursor(&mut self) {
        let len = self.boxes.get(self.kana_type).len_of(self.selected_tier);
        self.cursor.advance(len);
    }

    pub fn retreat_cursor(&mut self) {
        let len = self.boxes.get(self.kana_type).len_of(self.selected_tier);
        self.cursor.retreat(len);
    }

    /// Put every letter of both alphabets back in tier 1.
    pub fn reset_domain(&mut self) -> Result<()> {
        self.boxes = KanaBoxes::create();
        self.kana_type = self.default_kana;
        self.selected_tier = Tier::ONE;
        self.cursor.reset();
        tracing::info!(key = keys::LETTERS, "letter progress reset by user");
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let record = LettersRecord {
            kana_type: self.kana_type,
            tiers: KanaTiers {
                hiragana: &self.boxes.hiragana,
                katakana: &self.boxes.katakana,
            },
            selected_tier: self.selected_tier,
            updated_at: Utc::now(),
        };
        self.store.save(keys::LETTERS, &serde_json::to_string(&record)?)
    }
}
