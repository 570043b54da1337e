//! Deck statistics for the study screen.

use crate::queue::due_count;
use crate::types::Card;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interval (days) at which a card counts as mastered.
pub const MASTERED_INTERVAL: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    pub total: usize,
    pub due: usize,
    pub mastered: usize,
    pub total_reviews: u64,
    /// Share of the deck not currently due, 0-100.
    pub progress_percent: u8,
}

impl DeckStats {
    pub fn compute(cards: &[Card], now: DateTime<Utc>) -> Self {
        let total = cards.len();
        let due = due_count(cards, now);
        let mastered = cards
            .iter()
            .filter(|card| card.review.interval >= MASTERED_INTERVAL)
            .count();
        let total_reviews = cards.iter().map(|card| u64::from(card.review.reviews)).sum();
        let progress_percent = if total == 0 {
            0
        } else {
            (((total - due) as f64 / total as f64) * 100.0).round().min(100.0) as u8
        };

        Self {
            total,
            due,
            mastered,
            total_reviews,
            progress_percent,
        }
    }
}

/// Human-readable time until `at`, e.g. "Due now", "in 5 min", "in 3 days".
pub fn format_next_review(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (at - now).num_milliseconds();
    if diff_ms <= 0 {
        return "Due now".to_string();
    }
    let minutes = (diff_ms as f64 / 60_000.0).round() as i64;
    if minutes < 60 {
        return format!("in {} min", minutes);
    }
    let hours = (minutes as f64 / 60.0).round() as i64;
    if hours < 24 {
        return format!("in {} hr", hours);
    }
    let days = (hours as f64 / 24.0).round() as i64;
    format!("in {} day{}", days, if days > 1 { "s" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn card(id: i64, interval: u32, reviews: u32, due_in_hours: i64) -> Card {
        let mut card = Card::new(id, "字", "zi4", "character", "HSK 1", now());
        card.review.interval = interval;
        card.review.reviews = reviews;
        card.review.next_review_at = now() + Duration::hours(due_in_hours);
        card
    }

    #[test]
    fn empty_deck() {
        let stats = DeckStats::compute(&[], now());
        assert_eq!(
            stats,
            DeckStats {
                total: 0,
                due: 0,
                mastered: 0,
                total_reviews: 0,
                progress_percent: 0,
            }
        );
    }

    #[test]
    fn counts_due_mastered_and_reviews() {
        let cards = vec![
            card(1, 0, 0, 0),
            card(2, 7, 4, 100),
            card(3, 20, 6, 300),
        ];
        let stats = DeckStats::compute(&cards, now());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.due, 1);
        assert_eq!(stats.mastered, 2);
        assert_eq!(stats.total_reviews, 10);
        // 2 of 3 cleared
        assert_eq!(stats.progress_percent, 67);
    }

    #[test]
    fn all_due_is_zero_progress() {
        let cards = vec![card(1, 0, 0, -1), card(2, 1, 1, -3)];
        assert_eq!(DeckStats::compute(&cards, now()).progress_percent, 0);
    }

    #[test]
    fn formats_relative_times() {
        let n = now();
        assert_eq!(format_next_review(n, n), "Due now");
        assert_eq!(format_next_review(n - Duration::days(2), n), "Due now");
        assert_eq!(format_next_review(n + Duration::seconds(20), n), "in 0 min");
        assert_eq!(format_next_review(n + Duration::minutes(5), n), "in 5 min");
        assert_eq!(format_next_review(n + Duration::minutes(59), n), "in 59 min");
        assert_eq!(format_next_review(n + Duration::minutes(90), n), "in 2 hr");
        assert_eq!(format_next_review(n + Duration::hours(23), n), "in 23 hr");
        assert_eq!(format_next_review(n + Duration::hours(24), n), "in 1 day");
        assert_eq!(format_next_review(n + Duration::days(3), n), "in 3 days");
    }
}
