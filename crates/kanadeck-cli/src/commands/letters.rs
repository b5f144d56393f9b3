use std::io;

use clap::Subcommand;
use kanadeck_core::{Config, Database, KanaType, LettersDeck};

use super::deck::{card_line, run_action, DeckAction};

#[derive(Subcommand)]
pub enum LettersAction {
    #[command(flatten)]
    Deck(DeckAction),
    /// Switch between hiragana and katakana
    Kana {
        /// hiragana or katakana
        kana: KanaType,
    },
}

pub fn run(action: LettersAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut deck = LettersDeck::open_with(&db, config.study.default_kana)?;

    match action {
        LettersAction::Deck(action) => run_action(&mut deck, action, &mut io::stdin().lock())?,
        LettersAction::Kana { kana } => {
            deck.set_kana_type(kana)?;
            println!("{}", card_line(&deck));
        }
    }
    Ok(())
}
