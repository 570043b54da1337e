//! Spaced repetition scheduling.

pub mod sm2_lite;

use crate::types::{Card, Grade, ReviewState};
use chrono::{DateTime, Utc};

pub use sm2_lite::Sm2Lite;

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next review state after a graded review.
    fn schedule(&self, state: &ReviewState, grade: Grade, now: DateTime<Utc>) -> ReviewState;

    /// Initial state for a new card.
    fn initial_state(&self, now: DateTime<Utc>) -> ReviewState;
}

/// Review state for a freshly created card, due at `now`.
pub fn initialize_card(now: DateTime<Utc>) -> ReviewState {
    Sm2Lite::default().initial_state(now)
}

/// Grade `card` at `now`, returning the card with its new review state.
///
/// The argument is left untouched.
pub fn update_srs(card: &Card, grade: Grade, now: DateTime<Utc>) -> Card {
    card.with_review(Sm2Lite::default().schedule(&card.review, grade, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn initialize_card_defaults() {
        let state = initialize_card(now());
        assert_eq!(state.ease, 2.5);
        assert_eq!(state.interval, 0);
        assert_eq!(state.reviews, 0);
        assert_eq!(state.next_review_at, now());
    }

    #[test]
    fn update_srs_returns_new_card() {
        let card = Card::new(1, "你", "ni3", "you", "HSK 1", now());
        let updated = update_srs(&card, Grade::Good, now());
        assert_eq!(card.review.reviews, 0);
        assert_eq!(updated.review.reviews, 1);
        assert_eq!(updated.review.interval, 1);
        assert_eq!(updated.review.next_review_at, now() + Duration::days(1));
        assert_eq!(updated.hanzi, card.hanzi);
    }
}
