//! Lightweight SM-2 scheduling.
//!
//! Successful reviews step through fixed intervals (1 day, then 3 days)
//! before growing by the ease factor. A failed review resets the interval
//! and lowers the ease, which never drops below the minimum.

use super::SpacedRepetitionAlgorithm;
use crate::types::{Grade, ReviewState};
use chrono::{DateTime, Duration, Utc};

/// SM-2 lite with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2Lite {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub lapse_penalty: f64,
    pub easy_bonus: f64,
    pub first_interval: u32,
    pub second_interval: u32,
}

impl Default for Sm2Lite {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            lapse_penalty: 0.2,
            easy_bonus: 0.1,
            first_interval: 1,
            second_interval: 3,
        }
    }
}

impl SpacedRepetitionAlgorithm for Sm2Lite {
    fn name(&self) -> &'static str {
        "sm2_lite"
    }

    fn initial_state(&self, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            ease: self.initial_ease,
            interval: 0,
            next_review_at: now,
            reviews: 0,
        }
    }

    fn schedule(&self, state: &ReviewState, grade: Grade, now: DateTime<Utc>) -> ReviewState {
        let (ease, interval) = match grade {
            Grade::Again => (
                (state.ease - self.lapse_penalty).max(self.minimum_ease),
                self.first_interval,
            ),
            Grade::Good => (state.ease, self.grow_interval(state.interval, state.ease)),
            Grade::Easy => {
                let ease = state.ease + self.easy_bonus;
                (ease, self.grow_interval(state.interval, ease))
            }
        };

        tracing::debug!(
            grade = grade.as_str(),
            ease,
            interval,
            previous_interval = state.interval,
            "scheduled review"
        );

        ReviewState {
            ease,
            interval,
            next_review_at: due_after(now, interval),
            reviews: state.reviews + 1,
        }
    }
}

impl Sm2Lite {
    fn grow_interval(&self, previous: u32, ease: f64) -> u32 {
        match previous {
            0 => self.first_interval,
            p if p == self.first_interval => self.second_interval,
            p => (p as f64 * ease).round() as u32,
        }
    }
}

/// `now` plus `days`, saturating at the latest representable instant.
fn due_after(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
