use std::io;

use kanadeck_core::{Config, ContentSource, Database, ProgressStore, SentenceDeck};

use super::deck::{run_action, DeckAction};

/// Open the sentence deck on `day`, loading its content from the configured
/// source. Falls back to the built-in sample when the day cannot be loaded.
pub fn open_day<S: ProgressStore>(
    store: S,
    config: &Config,
    day: u32,
) -> Result<SentenceDeck<S>, Box<dyn std::error::Error>> {
    let source = ContentSource::from_config(&config.content)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut deck = SentenceDeck::new(store, config.content.days);
    runtime.block_on(deck.switch_day(day, &source))?;
    if deck.is_fallback() {
        eprintln!("note: content for day {day} is unavailable, showing the built-in sample");
    }
    Ok(deck)
}

pub fn run(day: u32, action: DeckAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let mut deck = open_day(&db, &config, day)?;
    run_action(&mut deck, action, &mut io::stdin().lock())
}
