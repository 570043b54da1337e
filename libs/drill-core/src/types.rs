//! Core types for the drill.

use crate::error::{Error, Result};
use crate::pinyin::number_to_diacritic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Learner's grade for a review, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Again,
    Good,
    Easy,
}

impl Grade {
    /// Numeric code used by grade buttons (0, 2, 3).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Again => 0,
            Self::Good => 2,
            Self::Easy => 3,
        }
    }

    /// Create from a numeric grade code. Any value other than 0, 2 or 3 is
    /// rejected rather than read as a pass.
    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Again),
            2 => Ok(Self::Good),
            3 => Ok(Self::Easy),
            _ => Err(Error::InvalidGrade(value)),
        }
    }

    /// Map a typed-answer verdict to a grade.
    /// Wrong -> Again, Correct -> Good
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Good
        } else {
            Self::Again
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }

    /// Parse from a grade name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "again" => Some(Self::Again),
            "good" => Some(Self::Good),
            "easy" => Some(Self::Easy),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_value(value)
    }
}

/// Review state of a card, replaced wholesale after every grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Interval growth multiplier, never below the scheduler's minimum.
    pub ease: f64,
    /// Days until the next review.
    pub interval: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub next_review_at: DateTime<Utc>,
    pub reviews: u32,
}

impl ReviewState {
    /// Fresh state for a card that has never been reviewed.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            ease: 2.5,
            interval: 0,
            next_review_at: now,
            reviews: 0,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }
}

/// Vocabulary card with its review state.
///
/// Content fields are opaque to the scheduler. `pinyin` is stored in
/// tone-number notation with one group per syllable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub hanzi: String,
    pub pinyin: String,
    pub english: String,
    pub hsk: String,
    #[serde(flatten)]
    pub review: ReviewState,
}

impl Card {
    pub fn new(
        id: i64,
        hanzi: impl Into<String>,
        pinyin: impl Into<String>,
        english: impl Into<String>,
        hsk: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            hanzi: hanzi.into(),
            pinyin: pinyin.into(),
            english: english.into(),
            hsk: hsk.into(),
            review: ReviewState::new(now),
        }
    }

    /// Same content with `review` in place of the current state.
    pub fn with_review(&self, review: ReviewState) -> Self {
        Self {
            review,
            ..self.clone()
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.review.is_due(now)
    }

    /// Pinyin in diacritic notation, for the answer face.
    pub fn display_pinyin(&self) -> String {
        number_to_diacritic(&self.pinyin)
    }
}
