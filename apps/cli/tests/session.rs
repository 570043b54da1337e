mod common;

use std::io::Cursor;

use chrono::Duration;
use drill_core::{Card, FixedClock};
use hanzi_drill::session::{SessionSummary, StudySession};
use pretty_assertions::assert_eq;

use common::{deck, start};

fn run_session(cards: &mut Vec<Card>, input: &str, limit: Option<usize>) -> (SessionSummary, String, usize) {
    let clock = FixedClock::new(start());
    let mut output = Vec::new();
    let mut saves = 0;
    let summary = StudySession::new(cards, &clock, Cursor::new(input.to_string()), &mut output)
        .with_limit(limit)
        .run(|_| {
            saves += 1;
            Ok(())
        })
        .unwrap();
    (summary, String::from_utf8(output).unwrap(), saves)
}

#[test]
fn grades_typed_answers() {
    let mut cards = deck();
    let (summary, output, saves) = run_session(&mut cards, "ni3 hao3\nxiè xie4\n", None);

    assert_eq!(
        summary,
        SessionSummary {
            reviewed: 2,
            correct: 1,
            skipped: 0,
        }
    );
    assert_eq!(saves, 2);
    assert!(output.contains("Correct!"));
    assert!(output.contains("Close: the tones are off."));
    assert!(output.contains("Nothing due. Next review in 1 day."));

    assert_eq!(cards[0].review.interval, 1);
    assert_eq!(cards[0].review.ease, 2.5);
    assert_eq!(cards[0].review.reviews, 1);
    assert_eq!(cards[0].review.next_review_at, start() + Duration::days(1));

    assert_eq!(cards[1].review.interval, 1);
    assert!((cards[1].review.ease - 2.3).abs() < 1e-9);
    assert_eq!(cards[1].review.reviews, 1);
}

#[test]
fn shows_diacritic_preview_of_answer() {
    let mut cards = deck();
    let (_, output, _) = run_session(&mut cards, "ni3   hao3\n", Some(1));
    assert!(output.contains("you typed: nǐ haǒ"));
    assert!(output.contains("[tones 3-3]"));
}

#[test]
fn skip_moves_to_next_card() {
    let mut cards = deck();
    let (summary, output, saves) = run_session(&mut cards, ":skip\nxie4 xie5\n:quit\n", None);

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.reviewed, 1);
    assert_eq!(saves, 1);
    assert!(output.contains("谢谢"));
    assert_eq!(cards[0].review.reviews, 0);
    assert_eq!(cards[1].review.reviews, 1);
}

#[test]
fn reveal_asks_for_grade() {
    let mut cards = deck();
    let (summary, output, _) = run_session(&mut cards, ":reveal\n1\neasy\n", Some(1));

    assert_eq!(summary.reviewed, 1);
    assert!(output.contains("invalid grade 1"));
    assert!(output.contains("answer: 你好  nǐ haǒ"));
    assert!((cards[0].review.ease - 2.6).abs() < 1e-9);
    assert_eq!(cards[0].review.interval, 1);
}

#[test]
fn stops_at_end_of_input() {
    let mut cards = deck();
    let (summary, _, saves) = run_session(&mut cards, "", None);
    assert_eq!(summary, SessionSummary::default());
    assert_eq!(saves, 0);
}

#[test]
fn nothing_due_ends_immediately() {
    let mut cards = deck();
    for card in cards.iter_mut() {
        card.review.next_review_at = start() + Duration::minutes(30);
    }
    let (summary, output, _) = run_session(&mut cards, "ni3 hao3\n", None);
    assert_eq!(summary.reviewed, 0);
    assert!(output.contains("Nothing due. Next review in 30 min."));
}

#[test]
fn empty_deck_is_reported() {
    let mut cards = Vec::new();
    let (_, output, _) = run_session(&mut cards, "", None);
    assert!(output.contains("The deck is empty."));
}
