//! Interactive study session.

use anyhow::{bail, Result};
use drill_core::queue::{get_next_card, skip};
use drill_core::{
    annotate, check_answer, format_next_review, number_to_diacritic, update_srs, Card, Clock,
    Grade,
};
use std::io::{BufRead, Write};

/// Outcome of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub correct: usize,
    pub skipped: usize,
}

enum Step {
    Graded { grade: Grade, correct: bool },
    Skip,
    Quit,
}

/// Runs the typed-answer drill over due cards.
///
/// After every grade the whole deck is handed to `persist`.
pub struct StudySession<'a, R, W> {
    cards: &'a mut Vec<Card>,
    clock: &'a dyn Clock,
    input: R,
    output: W,
    limit: Option<usize>,
}

impl<'a, R: BufRead, W: Write> StudySession<'a, R, W> {
    pub fn new(cards: &'a mut Vec<Card>, clock: &'a dyn Clock, input: R, output: W) -> Self {
        Self {
            cards,
            clock,
            input,
            output,
            limit: None,
        }
    }

    /// Stop after `limit` graded cards.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn run(mut self, mut persist: impl FnMut(&[Card]) -> Result<()>) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut forced: Option<i64> = None;

        writeln!(
            self.output,
            "Type the pinyin with tone numbers (ni3 hao3) or marks (nǐ hǎo).\nCommands: :reveal  :skip  :quit"
        )?;

        loop {
            if self.limit.is_some_and(|limit| summary.reviewed >= limit) {
                break;
            }

            let now = self.clock.now();
            let current = match forced.take() {
                Some(id) => self.cards.iter().find(|c| c.id == id),
                None => get_next_card(self.cards.as_slice(), now),
            };
            let Some(card) = current.cloned() else {
                self.report_nothing_due()?;
                break;
            };

            match self.ask(&card)? {
                Step::Quit => break,
                Step::Skip => match skip(self.cards.as_slice(), card.id, now) {
                    Some(next) => {
                        forced = Some(next.id);
                        summary.skipped += 1;
                    }
                    None => {
                        writeln!(self.output, "Nothing else to study.")?;
                        forced = Some(card.id);
                    }
                },
                Step::Graded { grade, correct } => {
                    let now = self.clock.now();
                    let updated = update_srs(&card, grade, now);
                    writeln!(
                        self.output,
                        "Graded {}; next review {}.",
                        grade.as_str(),
                        format_next_review(updated.review.next_review_at, now)
                    )?;
                    if let Some(slot) = self.cards.iter_mut().find(|c| c.id == card.id) {
                        *slot = updated;
                    }
                    persist(self.cards.as_slice())?;
                    summary.reviewed += 1;
                    if correct {
                        summary.correct += 1;
                    }
                }
            }
        }

        writeln!(
            self.output,
            "Session done: {} reviewed, {} correct, {} skipped.",
            summary.reviewed, summary.correct, summary.skipped
        )?;
        Ok(summary)
    }

    fn ask(&mut self, card: &Card) -> Result<Step> {
        writeln!(self.output)?;
        writeln!(self.output, "[{}] {}  ({})", card.hsk, card.hanzi, card.english)?;

        loop {
            let Some(line) = self.prompt("pinyin> ")? else {
                return Ok(Step::Quit);
            };
            match line.as_str() {
                "" => continue,
                ":quit" | ":q" => return Ok(Step::Quit),
                ":skip" | ":s" => return Ok(Step::Skip),
                ":reveal" | ":r" => {
                    self.show_answer(card)?;
                    return self.ask_grade();
                }
                answer => {
                    let collapsed = answer.split_whitespace().collect::<Vec<_>>().join(" ");
                    writeln!(self.output, "  you typed: {}", number_to_diacritic(&collapsed))?;

                    let result = check_answer(answer, &card.pinyin);
                    if result.is_correct {
                        writeln!(self.output, "  Correct!")?;
                    } else if result.letters_match {
                        writeln!(self.output, "  Close: the tones are off.")?;
                    } else {
                        writeln!(self.output, "  Not quite.")?;
                    }
                    self.show_answer(card)?;
                    return Ok(Step::Graded {
                        grade: Grade::from_correct(result.is_correct),
                        correct: result.is_correct,
                    });
                }
            }
        }
    }

    fn ask_grade(&mut self) -> Result<Step> {
        loop {
            let Some(line) = self.prompt("grade [0=again 2=good 3=easy]> ")? else {
                return Ok(Step::Quit);
            };
            if line == ":quit" || line == ":q" {
                return Ok(Step::Quit);
            }
            match parse_grade(&line) {
                Ok(grade) => {
                    return Ok(Step::Graded {
                        grade,
                        correct: grade != Grade::Again,
                    })
                }
                Err(err) => writeln!(self.output, "  {}", err)?,
            }
        }
    }

    fn show_answer(&mut self, card: &Card) -> Result<()> {
        let syllables = annotate(&card.pinyin);
        let rendered: Vec<&str> = syllables.iter().map(|s| s.text.as_str()).collect();
        let tones: Vec<String> = syllables.iter().map(|s| s.tone.to_string()).collect();
        writeln!(
            self.output,
            "  answer: {}  {}  [tones {}]  {}",
            card.hanzi,
            rendered.join(" "),
            tones.join("-"),
            card.english
        )?;
        Ok(())
    }

    fn report_nothing_due(&mut self) -> Result<()> {
        let now = self.clock.now();
        match self.cards.iter().map(|c| c.review.next_review_at).min() {
            Some(next) => writeln!(
                self.output,
                "Nothing due. Next review {}.",
                format_next_review(next, now)
            )?,
            None => writeln!(self.output, "The deck is empty.")?,
        }
        Ok(())
    }

    /// Read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Accept a numeric grade code or a grade name.
pub fn parse_grade(input: &str) -> Result<Grade> {
    let input = input.trim();
    if let Some(grade) = Grade::from_name(&input.to_lowercase()) {
        return Ok(grade);
    }
    match input.parse::<u8>() {
        Ok(value) => Ok(Grade::from_value(value)?),
        Err(_) => bail!("unknown grade {:?}: expected 0 (again), 2 (good) or 3 (easy)", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grade_codes_and_names() {
        assert_eq!(parse_grade("0").unwrap(), Grade::Again);
        assert_eq!(parse_grade("2").unwrap(), Grade::Good);
        assert_eq!(parse_grade(" Easy ").unwrap(), Grade::Easy);
        let err = parse_grade("1").unwrap_err();
        assert!(err.to_string().contains("invalid grade 1"));
        assert!(parse_grade("great").is_err());
        assert!(parse_grade("300").is_err());
    }
}
