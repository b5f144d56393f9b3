//! Actions shared by the letters and sentences commands.

use std::io::{self, BufRead, Write};

use clap::Subcommand;
use kanadeck_core::error::Result as CoreResult;
use kanadeck_core::{
    CurrentItem, LettersDeck, Outcome, ProgressStore, SentenceDeck, Tier, TierCounts, Transition,
};

/// What the CLI needs from a study deck.
pub trait Deck {
    /// Short label of the domain, e.g. `hiragana` or `day 3`.
    fn label(&self) -> String;
    fn current(&self) -> Option<CurrentItem>;
    /// Question side of the current card.
    fn front(&self) -> Option<String>;
    /// Answer side of the current card.
    fn back(&self) -> Option<String>;
    /// Memory aid that stops short of the answer.
    fn hint(&self) -> Option<String>;
    fn selected(&self) -> Tier;
    fn counts(&self) -> TierCounts;
    fn select(&mut self, tier: Tier) -> CoreResult<()>;
    fn answer(&mut self, outcome: Outcome) -> CoreResult<Option<Transition>>;
    fn next(&mut self);
    fn prev(&mut self);
    fn reset(&mut self) -> CoreResult<()>;
}

impl<S: ProgressStore> Deck for LettersDeck<S> {
    fn label(&self) -> String {
        self.kana_type().to_string()
    }

    fn current(&self) -> Option<CurrentItem> {
        self.current_item()
    }

    fn front(&self) -> Option<String> {
        self.current_kana().map(|(_, kana)| kana.hangul.to_string())
    }

    fn back(&self) -> Option<String> {
        self.current_kana()
            .map(|(_, kana)| format!("{} ({})", kana.glyph, kana.romaji))
    }

    fn hint(&self) -> Option<String> {
        self.current_kana()
            .map(|(_, kana)| format!("{}: {}", kana.keyword, kana.explanation))
    }

    fn selected(&self) -> Tier {
        self.selected_tier()
    }

    fn counts(&self) -> TierCounts {
        self.progress_by_tier()
    }

    fn select(&mut self, tier: Tier) -> CoreResult<()> {
        self.select_tier(tier)
    }

    fn answer(&mut self, outcome: Outcome) -> CoreResult<Option<Transition>> {
        self.record_outcome(outcome)
    }

    fn next(&mut self) {
        self.advance_cursor();
    }

    fn prev(&mut self) {
        self.retreat_cursor();
    }

    fn reset(&mut self) -> CoreResult<()> {
        self.reset_domain()
    }
}

impl<S: ProgressStore> Deck for SentenceDeck<S> {
    fn label(&self) -> String {
        match self.active_day() {
            Some(day) if self.is_fallback() => format!("day {day} (sample)"),
            Some(day) => format!("day {day}"),
            None => "no day loaded".to_string(),
        }
    }

    fn current(&self) -> Option<CurrentItem> {
        self.current_item()
    }

    fn front(&self) -> Option<String> {
        self.current_sentence().map(|(_, s)| s.korean.clone())
    }

    fn back(&self) -> Option<String> {
        self.current_sentence().map(|(_, s)| {
            let mut out = s.japanese.clone();
            if !s.reading().is_empty() {
                out.push_str(&format!("\n  {}", s.reading()));
            }
            if !s.english.is_empty() {
                out.push_str(&format!("\n  {}", s.english));
            }
            out
        })
    }

    fn hint(&self) -> Option<String> {
        self.current_sentence().map(|(_, s)| {
            if s.words.is_empty() {
                return "no hint words for this sentence".to_string();
            }
            s.words
                .iter()
                .map(|w| format!("- {}: {}({})", w.korean, w.japanese, w.pronounce_h))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    fn selected(&self) -> Tier {
        self.selected_tier().unwrap_or_default()
    }

    fn counts(&self) -> TierCounts {
        self.progress_by_tier()
    }

    fn select(&mut self, tier: Tier) -> CoreResult<()> {
        self.select_tier(tier)
    }

    fn answer(&mut self, outcome: Outcome) -> CoreResult<Option<Transition>> {
        self.record_outcome(outcome)
    }

    fn next(&mut self) {
        self.advance_cursor();
    }

    fn prev(&mut self) {
        self.retreat_cursor();
    }

    fn reset(&mut self) -> CoreResult<()> {
        self.reset_domain()
    }
}

#[derive(Subcommand)]
pub enum DeckAction {
    /// Show the current card of the selected tier
    Show,
    /// Select the tier to study (1-5)
    Tier {
        /// Tier number
        tier: Tier,
    },
    /// Show a memory aid for the current card
    Hint,
    /// Mark the current card as recalled
    Correct,
    /// Mark the current card as missed
    Wrong,
    /// Move to the next card in the tier
    Next,
    /// Move to the previous card in the tier
    Prev,
    /// Print per-tier counts as JSON
    Progress,
    /// Put every card back in tier 1
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Render the current card, or say the tier is empty.
pub fn card_line(deck: &impl Deck) -> String {
    match (deck.current(), deck.front()) {
        (Some(current), Some(front)) => format!(
            "[{}] tier {} ({}/{})\n{front}",
            deck.label(),
            current.tier,
            current.position + 1,
            current.tier_len
        ),
        _ => format!("[{}] tier {} is empty", deck.label(), deck.selected()),
    }
}

pub fn transition_line(transition: &Transition) -> String {
    let mut line = format!(
        "moved to tier {} (from tier {})",
        transition.to, transition.from
    );
    if transition.tier_exhausted {
        line.push_str(&format!("\ntier {} finished", transition.from));
    }
    line
}

pub fn progress_json(deck: &impl Deck) -> serde_json::Value {
    let counts = deck.counts();
    let tiers: serde_json::Map<String, serde_json::Value> = counts
        .iter()
        .map(|(tier, n)| (tier.to_string(), n.into()))
        .collect();
    serde_json::json!({
        "domain": deck.label(),
        "selectedTier": deck.selected(),
        "tiers": tiers,
        "total": counts.total(),
    })
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn confirm(question: &str, input: &mut impl BufRead) -> io::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Run one deck action. Resets always ask first unless `--yes` was given.
pub fn run_action(
    deck: &mut impl Deck,
    action: DeckAction,
    input: &mut impl BufRead,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DeckAction::Show => println!("{}", card_line(deck)),
        DeckAction::Tier { tier } => {
            deck.select(tier)?;
            println!("{}", card_line(deck));
        }
        DeckAction::Hint => match deck.hint() {
            Some(hint) => println!("{hint}"),
            None => println!("{}", card_line(deck)),
        },
        DeckAction::Correct | DeckAction::Wrong => {
            let outcome = Outcome::from(matches!(action, DeckAction::Correct));
            let answer = deck.back();
            match deck.answer(outcome)? {
                Some(transition) => {
                    if let Some(answer) = answer {
                        println!("{answer}");
                    }
                    println!("{}", transition_line(&transition));
                }
                None => println!("[{}] tier {} is empty", deck.label(), deck.selected()),
            }
        }
        DeckAction::Next => {
            deck.next();
            println!("{}", card_line(deck));
        }
        DeckAction::Prev => {
            deck.prev();
            println!("{}", card_line(deck));
        }
        DeckAction::Progress => {
            println!("{}", serde_json::to_string_pretty(&progress_json(deck))?);
        }
        DeckAction::Reset { yes } => {
            let question = format!("Reset all progress for {}?", deck.label());
            if yes || confirm(&question, input)? {
                deck.reset()?;
                println!("progress reset");
            } else {
                println!("reset cancelled");
            }
        }
    }
    Ok(())
}
