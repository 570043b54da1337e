//! Tone numbers and the tonal vowel lookup table.

use crate::error::Error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One of the four Mandarin tones, or the neutral tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tone {
    First,
    Second,
    Third,
    Fourth,
    Neutral,
}

impl Default for Tone {
    fn default() -> Self {
        Self::Neutral
    }
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::First,
        Tone::Second,
        Tone::Third,
        Tone::Fourth,
        Tone::Neutral,
    ];

    /// Tone number as written in tone-number notation (1-5).
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Neutral => 5,
        }
    }

    /// Create from a tone number (1-5).
    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            5 => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Create from an ASCII tone digit ('1'-'5').
    pub fn from_digit(digit: char) -> Option<Self> {
        digit
            .to_digit(10)
            .and_then(|d| Self::from_number(d as u8))
    }

    /// Class label used by presentation layers to colour a syllable.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::First => "tone tone-1",
            Self::Second => "tone tone-2",
            Self::Third => "tone tone-3",
            Self::Fourth => "tone tone-4",
            Self::Neutral => "tone tone-neutral",
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Self::Neutral
    }

    /// Column of this tone in [`TONE_TABLE`]; the neutral form sits in column 0.
    fn column(self) -> usize {
        match self {
            Self::Neutral => 0,
            other => other.number() as usize,
        }
    }
}

impl From<Tone> for u8 {
    fn from(tone: Tone) -> Self {
        tone.number()
    }
}

impl TryFrom<u8> for Tone {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or(Error::InvalidTone(value))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Tonal vowels with their forms `[neutral, tone 1, tone 2, tone 3, tone 4]`.
///
/// `v` is the keyboard stand-in for `ü` and renders as `ü`.
static TONE_TABLE: [(char, [char; 5]); 7] = [
    ('a', ['a', 'ā', 'á', 'ǎ', 'à']),
    ('e', ['e', 'ē', 'é', 'ě', 'è']),
    ('i', ['i', 'ī', 'í', 'ǐ', 'ì']),
    ('o', ['o', 'ō', 'ó', 'ǒ', 'ò']),
    ('u', ['u', 'ū', 'ú', 'ǔ', 'ù']),
    ('v', ['ü', 'ǖ', 'ǘ', 'ǚ', 'ǜ']),
    ('ü', ['ü', 'ǖ', 'ǘ', 'ǚ', 'ǜ']),
];

/// Reverse lookup from a marked vowel to its tone. Neutral forms are not keys.
static MARK_TONES: Lazy<HashMap<char, Tone>> = Lazy::new(|| {
    TONE_TABLE
        .iter()
        .flat_map(|(_, forms)| {
            forms[1..]
                .iter()
                .zip([Tone::First, Tone::Second, Tone::Third, Tone::Fourth])
                .map(|(&mark, tone)| (mark, tone))
        })
        .collect()
});

fn forms_of(vowel: char) -> Option<&'static [char; 5]> {
    let lower = vowel.to_lowercase().next().unwrap_or(vowel);
    TONE_TABLE
        .iter()
        .find(|(base, _)| *base == lower)
        .map(|(_, forms)| forms)
}

/// Whether `c` is a vowel that can carry a tone mark (case-insensitive).
pub fn is_tonal_vowel(c: char) -> bool {
    forms_of(c).is_some()
}

/// Render `vowel` with the mark for `tone`, keeping its case.
///
/// Returns `None` when `vowel` is not a tonal vowel.
pub fn marked_vowel(vowel: char, tone: Tone) -> Option<char> {
    let form = forms_of(vowel)?[tone.column()];
    if vowel.is_uppercase() {
        form.to_uppercase().next()
    } else {
        Some(form)
    }
}

/// Tone carried by a precomposed marked vowel, if any.
pub fn tone_of_mark(c: char) -> Option<Tone> {
    let lower = c.to_lowercase().next().unwrap_or(c);
    MARK_TONES.get(&lower).copied()
}
