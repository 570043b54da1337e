//! Due-card selection.
//!
//! Selection is a first-match scan in collection order: overdue cards are
//! not ranked ahead of cards that only just became due.

use crate::types::Card;
use chrono::{DateTime, Utc};

/// First card in `cards` whose review is due at `now`.
pub fn get_next_card(cards: &[Card], now: DateTime<Utc>) -> Option<&Card> {
    cards.iter().find(|card| card.is_due(now))
}

/// All due cards, in collection order.
pub fn due_cards(cards: &[Card], now: DateTime<Utc>) -> impl Iterator<Item = &Card> {
    cards.iter().filter(move |card| card.is_due(now))
}

pub fn due_count(cards: &[Card], now: DateTime<Utc>) -> usize {
    due_cards(cards, now).count()
}

/// Up to `limit` cards other than `current_id`, soonest review first.
pub fn up_next(cards: &[Card], current_id: i64, limit: usize) -> Vec<&Card> {
    let mut others: Vec<&Card> = cards.iter().filter(|card| card.id != current_id).collect();
    others.sort_by_key(|card| card.review.next_review_at);
    others.truncate(limit);
    others
}

/// Card to show instead of `current_id`: the first due card among the
/// others, else the first other card. `None` when there is nothing else.
pub fn skip(cards: &[Card], current_id: i64, now: DateTime<Utc>) -> Option<&Card> {
    let mut others = cards.iter().filter(|card| card.id != current_id);
    others
        .clone()
        .find(|card| card.is_due(now))
        .or_else(|| others.next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn card(id: i64, due_in_hours: i64) -> Card {
        let mut card = Card::new(id, "字", "zi4", "character", "HSK 1", now());
        card.review.next_review_at = now() + Duration::hours(due_in_hours);
        card
    }

    fn ids(cards: &[&Card]) -> Vec<i64> {
        cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn none_when_nothing_due() {
        let cards = vec![card(1, 1), card(2, 48)];
        assert!(get_next_card(&cards, now()).is_none());
        assert!(get_next_card(&[], now()).is_none());
    }

    #[test]
    fn first_due_card_in_collection_order() {
        let cards = vec![card(1, 5), card(2, -1), card(3, -100)];
        assert_eq!(get_next_card(&cards, now()).map(|c| c.id), Some(2));
    }

    #[test]
    fn due_exactly_now_counts() {
        let cards = vec![card(1, 0)];
        assert_eq!(get_next_card(&cards, now()).map(|c| c.id), Some(1));
    }

    #[test]
    fn counts_due_cards() {
        let cards = vec![card(1, -2), card(2, 3), card(3, 0)];
        assert_eq!(due_count(&cards, now()), 2);
        let due: Vec<i64> = due_cards(&cards, now()).map(|c| c.id).collect();
        assert_eq!(due, vec![1, 3]);
    }

    #[test]
    fn up_next_excludes_current_and_sorts() {
        let cards = vec![card(1, 10), card(2, -5), card(3, 2), card(4, 1), card(5, 30), card(6, 0)];
        assert_eq!(ids(&up_next(&cards, 4, 4)), vec![2, 6, 3, 1]);
        assert_eq!(ids(&up_next(&cards, 99, 2)), vec![2, 6]);
    }

    #[test]
    fn skip_prefers_due_cards() {
        let cards = vec![card(1, -1), card(2, 5), card(3, -3)];
        assert_eq!(skip(&cards, 1, now()).map(|c| c.id), Some(3));
    }

    #[test]
    fn skip_falls_back_to_first_other() {
        let cards = vec![card(1, -1), card(2, 5), card(3, 7)];
        assert_eq!(skip(&cards, 1, now()).map(|c| c.id), Some(2));
    }

    #[test]
    fn skip_needs_another_card() {
        let cards = vec![card(1, -1)];
        assert!(skip(&cards, 1, now()).is_none());
    }
}
