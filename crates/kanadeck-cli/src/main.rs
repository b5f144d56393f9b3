use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "kanadeck", version, about = "Kanadeck Leitner flashcards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hiragana and katakana cards
    Letters {
        #[command(subcommand)]
        action: commands::letters::LettersAction,
    },
    /// Sentence cards of one curriculum day
    Sentences {
        /// Curriculum day
        #[arg(long)]
        day: u32,
        #[command(subcommand)]
        action: commands::deck::DeckAction,
    },
    /// Interactive study session
    Study {
        #[command(subcommand)]
        target: commands::study::StudyTarget,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("KANADECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Letters { action } => commands::letters::run(action),
        Commands::Sentences { day, action } => commands::sentences::run(day, action),
        Commands::Study { target } => commands::study::run(target),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
