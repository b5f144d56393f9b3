//! Interactive study session on stdin. Unlike the one-shot commands the
//! cursor lives for the whole session.

use std::io::{self, BufRead, Write};

use clap::Subcommand;
use kanadeck_core::{Config, Database, KanaType, LettersDeck, Outcome, Tier};

use super::deck::{card_line, transition_line, Deck};
use super::sentences::open_day;

#[derive(Subcommand)]
pub enum StudyTarget {
    /// Study hiragana or katakana
    Letters {
        /// Alphabet to start with (defaults to the stored choice)
        #[arg(long)]
        kana: Option<KanaType>,
    },
    /// Study the sentences of one curriculum day
    Sentences {
        /// Curriculum day
        #[arg(long)]
        day: u32,
    },
}

const HELP: &str = "c correct | w wrong | n next | p prev | t N tier | f flip | h hint | ? help | q quit";

enum Command {
    Answer(Outcome),
    Next,
    Prev,
    Tier(Tier),
    Flip,
    Hint,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next().unwrap_or("");
    let command = match cmd {
        "c" | "correct" => Command::Answer(Outcome::Correct),
        "w" | "wrong" => Command::Answer(Outcome::Incorrect),
        "n" | "next" => Command::Next,
        "p" | "prev" => Command::Prev,
        "f" | "flip" => Command::Flip,
        "h" | "hint" => Command::Hint,
        "?" | "help" => Command::Help,
        "q" | "quit" => Command::Quit,
        "t" | "tier" => {
            let arg = parts.next().ok_or("usage: t <1-5>")?;
            Command::Tier(arg.parse().map_err(|e| format!("{e}"))?)
        }
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(command)
}

/// Drive `deck` from `input` until `q` or end of input.
pub fn session(
    deck: &mut impl Deck,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "{HELP}")?;
    writeln!(out, "{}", card_line(deck))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Hint) => match deck.hint() {
                Some(hint) => writeln!(out, "{hint}")?,
                None => writeln!(out, "{}", card_line(deck))?,
            },
            Ok(Command::Flip) => match deck.back() {
                Some(answer) => writeln!(out, "{answer}")?,
                None => writeln!(out, "{}", card_line(deck))?,
            },
            Ok(Command::Answer(outcome)) => {
                if let Some(transition) = deck.answer(outcome)? {
                    writeln!(out, "{}", transition_line(&transition))?;
                }
                writeln!(out, "{}", card_line(deck))?;
            }
            Ok(Command::Next) => {
                deck.next();
                writeln!(out, "{}", card_line(deck))?;
            }
            Ok(Command::Prev) => {
                deck.prev();
                writeln!(out, "{}", card_line(deck))?;
            }
            Ok(Command::Tier(tier)) => {
                deck.select(tier)?;
                writeln!(out, "{}", card_line(deck))?;
            }
            Err(message) => writeln!(out, "{message}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn run(target: StudyTarget) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match target {
        StudyTarget::Letters { kana } => {
            let mut deck = LettersDeck::open_with(&db, config.study.default_kana)?;
            if let Some(kana) = kana {
                deck.set_kana_type(kana)?;
            }
            session(&mut deck, stdin.lock(), &mut stdout)
        }
        StudyTarget::Sentences { day } => {
            let mut deck = open_day(&db, &config, day)?;
            session(&mut deck, stdin.lock(), &mut stdout)
        }
    }
}
