//! On-disk JSON shape of progress records.
//!
//! ```text
//! sentences: { "tiers": [[..] x5], "selectedTier": 1..5, "updatedAt": rfc3339 }
//! letters:   { "kanaType": "hiragana" | "katakana",
//!              "tiers": { "hiragana": [[..] x5], "katakana": [[..] x5] },
//!              "selectedTier": 1..5, "updatedAt": rfc3339 }
//! ```
//!
//! Records are written with serde and read back as loose JSON so the
//! reconciler can judge each part separately.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::content::KanaType;
use crate::leitner::{Boxes, Tier};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SentenceRecord<'a> {
    pub tiers: &'a Boxes,
    pub selected_tier: Tier,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(crate) struct KanaTiers<'a> {
    pub hiragana: &'a Boxes,
    pub katakana: &'a Boxes,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LettersRecord<'a> {
    pub kana_type: KanaType,
    pub tiers: KanaTiers<'a>,
    pub selected_tier: Tier,
    pub updated_at: DateTime<Utc>,
}

/// Parse a stored record. Unparseable text becomes `Null`, which the
/// reconciler treats as malformed rather than missing.
pub(crate) fn parse_raw(raw: Option<String>) -> Option<Value> {
    raw.map(|s| serde_json::from_str(&s).unwrap_or(Value::Null))
}

pub(crate) static NULL: Value = Value::Null;

/// A named entry of a stored record. An existing record without the entry
/// yields `Null` so it reconciles as malformed; no record yields `None`.
pub(crate) fn field<'a>(record: Option<&'a Value>, name: &str) -> Option<&'a Value> {
    record.map(|r| r.get(name).unwrap_or(&NULL))
}
