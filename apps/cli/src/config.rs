//! Runtime configuration.
//!
//! Precedence: `--deck` flag, then `HANZI_DRILL_DECK` (from the environment
//! or a `.env` file), then the per-user data directory.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the deck file.
pub const DECK_ENV: &str = "HANZI_DRILL_DECK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub deck_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the flag and the process environment.
    pub fn load(deck_flag: Option<PathBuf>) -> Self {
        dotenvy::dotenv().ok();
        Self::from_sources(deck_flag, std::env::var_os(DECK_ENV))
    }

    pub fn from_sources(deck_flag: Option<PathBuf>, deck_env: Option<OsString>) -> Self {
        let deck_path = deck_flag
            .or_else(|| deck_env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_deck_path);
        Self { deck_path }
    }
}

fn default_deck_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hanzi-drill")
        .join("deck.json")
}
