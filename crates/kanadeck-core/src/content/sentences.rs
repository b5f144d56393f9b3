use serde::{Deserialize, Serialize};

/// A vocabulary hint attached to a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub korean: String,
    pub japanese: String,
    #[serde(default)]
    pub pronounce_h: String,
}

/// One flashcard of the sentences domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default)]
    pub id: u32,
    pub korean: String,
    #[serde(default)]
    pub english: String,
    pub japanese: String,
    /// Romanized reading.
    #[serde(default)]
    pub pronounce_r: String,
    /// Hiragana reading.
    #[serde(default)]
    pub pronounce_h: String,
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Sentence {
    /// Reading shown on the answer side, hiragana preferred.
    pub fn reading(&self) -> &str {
        if self.pronounce_h.is_empty() {
            &self.pronounce_r
        } else {
            &self.pronounce_h
        }
    }
}

/// A loaded day, possibly substituted by the built-in sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayContent {
    pub day: u32,
    pub sentences: Vec<Sentence>,
    /// True when the day's own content could not be loaded.
    pub fallback: bool,
}

fn word(korean: &str, japanese: &str, pronounce_h: &str) -> Word {
    Word {
        korean: korean.into(),
        japanese: japanese.into(),
        pronounce_h: pronounce_h.into(),
    }
}

/// Built-in sample used whenever a day's content is unavailable.
pub fn fallback_sentences() -> Vec<Sentence> {
    vec![
        Sentence {
            id: 1,
            korean: "저는 한국 사람입니다.".into(),
            english: "I am Korean.".into(),
            japanese: "私は韓国人です。".into(),
            pronounce_r: "Watashi wa Kankokujin desu.".into(),
            pronounce_h: "わたし は かんこくじん です。".into(),
            words: vec![
                word("저/나", "私", "わたし"),
                word("한국 사람", "韓国人", "かんこくじん"),
            ],
        },
        Sentence {
            id: 2,
            korean: "이것은 무엇입니까?".into(),
            english: "What is this?".into(),
            japanese: "これは何ですか？".into(),
            pronounce_r: "Kore wa nan desu ka?".into(),
            pronounce_h: "これ は なん です か？".into(),
            words: vec![word("이것", "これ", "これ"), word("무엇", "何", "なん")],
        },
    ]
}
