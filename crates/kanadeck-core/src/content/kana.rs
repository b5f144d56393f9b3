use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::kana_tables::{HIRAGANA, KATAKANA};

/// Characters in each basic kana table.
pub const KANA_COUNT: usize = 46;

/// One flashcard of the letters domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Kana {
    pub glyph: char,
    pub romaji: &'static str,
    /// Closest Hangul spelling of the sound.
    pub hangul: &'static str,
    /// Mnemonic word that starts with the sound.
    pub keyword: &'static str,
    /// How the glyph's shape recalls the keyword.
    pub explanation: &'static str,
}

/// The two letter alphabets. Each keeps its own tier partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanaType {
    #[default]
    Hiragana,
    Katakana,
}

impl KanaType {
    pub fn as_str(self) -> &'static str {
        match self {
            KanaType::Hiragana => "hiragana",
            KanaType::Katakana => "katakana",
        }
    }

    pub fn item_count(self) -> usize {
        KANA_COUNT
    }

    pub fn toggle(self) -> KanaType {
        match self {
            KanaType::Hiragana => KanaType::Katakana,
            KanaType::Katakana => KanaType::Hiragana,
        }
    }

    pub fn get(self, index: usize) -> Option<Kana> {
        let table = match self {
            KanaType::Hiragana => &HIRAGANA,
            KanaType::Katakana => &KATAKANA,
        };
        table.get(index).copied()
    }
}

impl fmt::Display for KanaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KanaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hiragana" => Ok(KanaType::Hiragana),
            "katakana" => Ok(KanaType::Katakana),
            other => Err(ValidationError::UnknownKanaType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_share_romaji_order() {
        for (h, k) in HIRAGANA.iter().zip(&KATAKANA) {
            assert_eq!(h.romaji, k.romaji);
        }
    }

    #[test]
    fn every_entry_has_a_hint() {
        for kana in HIRAGANA.iter().chain(&KATAKANA) {
            assert!(!kana.keyword.is_empty(), "{}", kana.glyph);
            assert!(!kana.explanation.is_empty(), "{}", kana.glyph);
        }
        let a = KanaType::Hiragana.get(0).unwrap();
        assert_eq!((a.hangul, a.keyword), ("아", "아기"));
    }

    #[test]
    fn lookup_by_index() {
        let shi = KanaType::Hiragana.get(11).unwrap();
        assert_eq!((shi.glyph, shi.romaji), ('し', "shi"));
        let n = KanaType::Katakana.get(45).unwrap();
        assert_eq!((n.glyph, n.romaji), ('ン', "n"));
        assert!(KanaType::Katakana.get(KANA_COUNT).is_none());
    }

    #[test]
    fn parse_and_toggle() {
        assert_eq!("Katakana".parse::<KanaType>().unwrap(), KanaType::Katakana);
        assert!("kanji".parse::<KanaType>().is_err());
        assert_eq!(KanaType::Hiragana.toggle(), KanaType::Katakana);
    }
}
