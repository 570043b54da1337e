//! JSON deck file.

use chrono::{DateTime, Utc};
use drill_core::Card;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::starter::starter_deck;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access deck file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("deck file {} is not valid: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Deck persisted as a JSON array of cards.
#[derive(Debug, Clone)]
pub struct DeckStore {
    path: PathBuf,
}

impl DeckStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the deck, or `None` when the file does not exist yet.
    pub fn load(&self) -> Result<Option<Vec<Card>>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };
        let cards: Vec<Card> = serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), cards = cards.len(), "loaded deck");
        Ok(Some(cards))
    }

    /// Load the deck, writing the starter deck first if there is none.
    pub fn load_or_init(&self, now: DateTime<Utc>) -> Result<Vec<Card>, StoreError> {
        if let Some(cards) = self.load()? {
            return Ok(cards);
        }
        tracing::info!(path = %self.path.display(), "no deck found, creating starter deck");
        self.reset(now)
    }

    /// Replace the deck with fresh starter cards.
    pub fn reset(&self, now: DateTime<Utc>) -> Result<Vec<Card>, StoreError> {
        let cards = starter_deck(now).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        self.save(&cards)?;
        Ok(cards)
    }

    /// Write through a temporary file so a crash never leaves half a deck.
    pub fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(cards).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), cards = cards.len(), "saved deck");
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
