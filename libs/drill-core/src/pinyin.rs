//! Pinyin tone engine.
//!
//! Converts tone-number notation (`ni3 hao3`) to diacritic notation
//! (`nǐ hǎo`), normalizes either notation for tone-insensitive comparison,
//! and extracts per-syllable tones so answers can be checked with tones.

use crate::error::{Error, Result};
use crate::tones::{self, Tone};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letters followed by a single trailing digit. Digits outside 1-5 are
/// matched so they can be reported as malformed.
static NUMBERED_SYLLABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-zü]+)([0-9])$").expect("valid syllable regex"));

/// How a syllable marks its tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Trailing digit, e.g. `hao3`.
    Number,
    /// Marked vowel, e.g. `hǎo`.
    Diacritic,
    /// No marker at all; read as the neutral tone.
    Unmarked,
}

/// A single syllable with its tone resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// The syllable without a trailing tone digit.
    pub letters: String,
    pub tone: Tone,
    pub notation: Notation,
}

/// Parse one whitespace-free syllable in either notation.
///
/// A trailing digit wins over any diacritic. A trailing digit outside 1-5 is
/// reported as [`Error::MalformedSyllable`].
pub fn parse_syllable(syllable: &str) -> Result<Syllable> {
    if let Some(last) = syllable.chars().last().filter(char::is_ascii_digit) {
        let letters = &syllable[..syllable.len() - last.len_utf8()];
        return match Tone::from_digit(last) {
            Some(tone) => Ok(Syllable {
                letters: letters.to_string(),
                tone,
                notation: Notation::Number,
            }),
            None => Err(Error::MalformedSyllable {
                syllable: syllable.to_string(),
                digit: last,
            }),
        };
    }

    // Compose first so a combining mark typed after its vowel is still found.
    let composed: String = syllable.nfc().collect();
    match composed.chars().find_map(tones::tone_of_mark) {
        Some(tone) => Ok(Syllable {
            letters: composed,
            tone,
            notation: Notation::Diacritic,
        }),
        None => Ok(Syllable {
            letters: composed,
            tone: Tone::Neutral,
            notation: Notation::Unmarked,
        }),
    }
}

/// Convert tone-number notation to diacritic notation, syllable by syllable.
///
/// The mark goes on the rightmost tonal vowel. Syllables without a tone
/// digit, without a tonal vowel, or with a digit outside 1-5 are returned
/// unchanged. Tone 5 drops the digit and adds no mark.
pub fn number_to_diacritic(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(syllable_to_diacritic)
        .collect::<Vec<_>>()
        .join(" ")
}

fn syllable_to_diacritic(syllable: &str) -> String {
    let Some(caps) = NUMBERED_SYLLABLE.captures(syllable) else {
        return syllable.to_string();
    };
    let letters = &caps[1];
    let digit = caps[2].chars().next().unwrap_or('0');

    let Some(tone) = Tone::from_digit(digit) else {
        tracing::debug!(syllable, "tone digit outside 1-5, leaving syllable unchanged");
        return syllable.to_string();
    };

    let Some((idx, vowel)) = letters
        .char_indices()
        .rev()
        .find(|(_, c)| tones::is_tonal_vowel(*c))
    else {
        return syllable.to_string();
    };

    let mut out = String::with_capacity(letters.len() + 1);
    out.push_str(&letters[..idx]);
    out.push(tones::marked_vowel(vowel, tone).unwrap_or(vowel));
    out.push_str(&letters[idx + vowel.len_utf8()..]);
    out
}

/// Strip tone marks and tone digits for tone-insensitive comparison.
///
/// Lowercases, removes combining marks after canonical decomposition, removes
/// digits 1-5, collapses whitespace runs and trims. Idempotent.
pub fn normalize_pinyin(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !matches!(*c, '1'..='5'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tones of each whitespace-delimited syllable, in order.
///
/// Unmarked syllables are neutral. A malformed syllable (trailing digit
/// outside 1-5) contributes no tone of its own and also reads as neutral,
/// so the output always has one entry per syllable.
pub fn extract_tones(phrase: &str) -> Vec<Tone> {
    phrase
        .split_whitespace()
        .map(|s| parse_syllable(s).map(|syl| syl.tone).unwrap_or(Tone::Neutral))
        .collect()
}

/// Like [`extract_tones`] but reports the first malformed syllable.
pub fn try_extract_tones(phrase: &str) -> Result<Vec<Tone>> {
    phrase
        .split_whitespace()
        .map(|s| {
            parse_syllable(s).map(|syl| syl.tone).map_err(|err| {
                tracing::warn!(%err, "rejecting pinyin phrase");
                err
            })
        })
        .collect()
}

/// Result of checking a typed answer against the target pinyin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinyinMatch {
    /// Letters and tones both match.
    pub is_correct: bool,
    /// Letters match once tones and notation are ignored.
    pub letters_match: bool,
    /// Tone sequences have the same length and agree element-wise.
    pub tones_match: bool,
    pub input_normalized: String,
    pub target_normalized: String,
    pub input_tones: Vec<Tone>,
    pub target_tones: Vec<Tone>,
}

/// Check `input` against `target`, accepting either notation on either side.
pub fn check_answer(input: &str, target: &str) -> PinyinMatch {
    let input_normalized = normalize_pinyin(input);
    let target_normalized = normalize_pinyin(target);
    let input_tones = extract_tones(input);
    let target_tones = extract_tones(target);

    let letters_match = input_normalized == target_normalized;
    let tones_match = input_tones == target_tones;

    PinyinMatch {
        is_correct: letters_match && tones_match,
        letters_match,
        tones_match,
        input_normalized,
        target_normalized,
        input_tones,
        target_tones,
    }
}

/// Whether `input` matches `target` in both letters and tones.
pub fn compare_pinyin(input: &str, target: &str) -> bool {
    check_answer(input, target).is_correct
}

/// A syllable rendered for display alongside its tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSyllable {
    pub text: String,
    pub tone: Tone,
}

impl AnnotatedSyllable {
    pub fn class_name(&self) -> &'static str {
        self.tone.class_name()
    }
}

/// Render each syllable in diacritic notation, paired with its tone.
pub fn annotate(phrase: &str) -> Vec<AnnotatedSyllable> {
    phrase
        .split_whitespace()
        .map(|s| AnnotatedSyllable {
            text: syllable_to_diacritic(s),
            tone: parse_syllable(s).map(|syl| syl.tone).unwrap_or(Tone::Neutral),
        })
        .collect()
}
