//! Built-in starter deck.

use chrono::{DateTime, Utc};
use drill_core::Card;
use serde::Deserialize;

const STARTER_DECK: &str = include_str!("starter_deck.json");

#[derive(Debug, Deserialize)]
struct Entry {
    id: i64,
    hanzi: String,
    pinyin: String,
    english: String,
    hsk: String,
}

/// Starter cards with fresh review state, all due at `now`.
pub fn starter_deck(now: DateTime<Utc>) -> serde_json::Result<Vec<Card>> {
    let entries: Vec<Entry> = serde_json::from_str(STARTER_DECK)?;
    Ok(entries
        .into_iter()
        .map(|e| Card::new(e.id, e.hanzi, e.pinyin, e.english, e.hsk, now))
        .collect())
}
