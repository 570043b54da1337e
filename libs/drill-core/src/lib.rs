//! Core library for the Mandarin pronunciation drill.
//!
//! Provides:
//! - Pinyin tone engine (tone-number <-> diacritic conversion, normalization,
//!   tone extraction, tone-aware answer comparison)
//! - Lightweight SM-2 review scheduling
//! - Due-card selection and session statistics
//! - Shared types (Card, ReviewState, Grade, Tone)
//!
//! Every function here is pure: time is passed in by the caller and nothing
//! touches storage.

pub mod algorithm;
pub mod clock;
pub mod error;
pub mod pinyin;
pub mod queue;
pub mod stats;
pub mod tones;
pub mod types;

pub use algorithm::{initialize_card, update_srs, Sm2Lite, SpacedRepetitionAlgorithm};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use pinyin::{
    annotate, check_answer, compare_pinyin, extract_tones, normalize_pinyin, number_to_diacritic,
    parse_syllable, try_extract_tones, AnnotatedSyllable, Notation, PinyinMatch, Syllable,
};
pub use queue::{due_count, get_next_card, skip, up_next};
pub use stats::{format_next_review, DeckStats};
pub use tones::Tone;
pub use types::{Card, Grade, ReviewState};
