//! Shared fixtures for CLI integration tests.

use chrono::{DateTime, TimeZone, Utc};
use drill_core::Card;

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

pub fn deck() -> Vec<Card> {
    vec![
        Card::new(1, "你好", "ni3 hao3", "hello", "HSK 1", start()),
        Card::new(2, "谢谢", "xie4 xie5", "thank you", "HSK 1", start()),
    ]
}
