//! Terminal drill for Mandarin tones.
//!
//! Owns everything the core leaves to its caller: the deck file, the wall
//! clock, configuration and logging.

pub mod commands;
pub mod config;
pub mod session;
pub mod starter;
pub mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "hanzi-drill",
    about = "Drill Mandarin pinyin tones with spaced repetition",
    version
)]
pub struct Cli {
    /// Deck file (overrides HANZI_DRILL_DECK)
    #[arg(long, global = true)]
    pub deck: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Study due cards by typing their pinyin
    Study {
        /// Stop after this many graded cards
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show deck progress and what is coming up
    Stats,
    /// Render tone-number pinyin with tone marks
    Preview {
        #[arg(required = true)]
        pinyin: Vec<String>,
    },
    /// Check an answer against target pinyin
    Check {
        answer: String,
        #[arg(long)]
        target: String,
    },
    /// Restore the starter deck and clear review history
    Reset {
        /// Confirm discarding review history
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.deck.clone());
    init_tracing();

    tracing::debug!(deck = %config.deck_path.display(), "resolved configuration");
    commands::dispatch(cli.command, &config, std::io::stdin().lock(), std::io::stdout().lock())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
