//! Subcommand handlers.

use anyhow::{bail, Context, Result};
use drill_core::queue::up_next;
use drill_core::{
    annotate, check_answer, format_next_review, get_next_card, number_to_diacritic,
    try_extract_tones, Clock, DeckStats, SystemClock,
};
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::session::StudySession;
use crate::store::DeckStore;
use crate::Command;

/// How many upcoming cards `stats` lists.
const UP_NEXT_LIMIT: usize = 4;

pub fn dispatch<R: BufRead, W: Write>(
    command: Command,
    config: &Config,
    input: R,
    output: W,
) -> Result<()> {
    dispatch_with_clock(command, config, &SystemClock, input, output)
}

pub fn dispatch_with_clock<R: BufRead, W: Write>(
    command: Command,
    config: &Config,
    clock: &dyn Clock,
    input: R,
    mut output: W,
) -> Result<()> {
    let store = DeckStore::new(&config.deck_path);
    match command {
        Command::Study { limit } => study(&store, clock, limit, input, output),
        Command::Stats => stats(&store, clock, &mut output),
        Command::Preview { pinyin } => preview(&pinyin.join(" "), &mut output),
        Command::Check { answer, target } => check(&answer, &target, &mut output),
        Command::Reset { yes } => reset(&store, clock, yes, &mut output),
    }
}

fn study<R: BufRead, W: Write>(
    store: &DeckStore,
    clock: &dyn Clock,
    limit: Option<usize>,
    input: R,
    output: W,
) -> Result<()> {
    let mut cards = store
        .load_or_init(clock.now())
        .context("could not open the deck")?;
    let summary = StudySession::new(&mut cards, clock, input, output)
        .with_limit(limit)
        .run(|cards| store.save(cards).context("could not save progress"))?;
    tracing::info!(
        reviewed = summary.reviewed,
        correct = summary.correct,
        skipped = summary.skipped,
        "study session finished"
    );
    Ok(())
}

fn stats(store: &DeckStore, clock: &dyn Clock, output: &mut impl Write) -> Result<()> {
    let now = clock.now();
    let cards = store
        .load_or_init(now)
        .context("could not open the deck")?;
    let stats = DeckStats::compute(&cards, now);

    writeln!(output, "Cards:      {}", stats.total)?;
    writeln!(output, "Due now:    {}", stats.due)?;
    writeln!(output, "Mastered:   {}", stats.mastered)?;
    writeln!(output, "Reviews:    {}", stats.total_reviews)?;
    writeln!(output, "Progress:   {}% of deck cleared", stats.progress_percent)?;

    let Some(current) = get_next_card(&cards, now).or_else(|| cards.first()) else {
        return Ok(());
    };
    writeln!(output)?;
    writeln!(
        output,
        "Current: {} {} ({})",
        current.hanzi,
        current.display_pinyin(),
        format_next_review(current.review.next_review_at, now)
    )?;

    let upcoming = up_next(&cards, current.id, UP_NEXT_LIMIT);
    if upcoming.is_empty() {
        writeln!(output, "All caught up.")?;
    } else {
        writeln!(output, "Up next:")?;
        for card in upcoming {
            writeln!(
                output,
                "  [{}] {}  {}",
                card.hsk,
                card.hanzi,
                format_next_review(card.review.next_review_at, now)
            )?;
        }
    }
    Ok(())
}

fn preview(pinyin: &str, output: &mut impl Write) -> Result<()> {
    if let Err(err) = try_extract_tones(pinyin) {
        writeln!(output, "warning: {}", err)?;
    }
    writeln!(output, "{}", number_to_diacritic(pinyin))?;
    for syllable in annotate(pinyin) {
        writeln!(
            output,
            "  {:<8} tone {}  {}",
            syllable.text,
            syllable.tone,
            syllable.class_name()
        )?;
    }
    Ok(())
}

fn check(answer: &str, target: &str, output: &mut impl Write) -> Result<()> {
    let result = check_answer(answer, target);
    let verdict = match (result.letters_match, result.tones_match) {
        (true, true) => "correct".to_string(),
        (true, false) => format!(
            "incorrect: tones {} vs {}",
            join_tones(&result.input_tones),
            join_tones(&result.target_tones)
        ),
        (false, _) => format!(
            "incorrect: \"{}\" vs \"{}\"",
            result.input_normalized, result.target_normalized
        ),
    };
    writeln!(output, "{}", verdict)?;
    Ok(())
}

fn join_tones(tones: &[drill_core::Tone]) -> String {
    tones
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

fn reset(store: &DeckStore, clock: &dyn Clock, yes: bool, output: &mut impl Write) -> Result<()> {
    if !yes {
        bail!("reset discards all review history; rerun with --yes to confirm");
    }
    let cards = store.reset(clock.now()).context("could not reset the deck")?;
    tracing::info!(path = %store.path().display(), "deck reset");
    writeln!(
        output,
        "Restored {} starter cards in {}.",
        cards.len(),
        store.path().display()
    )?;
    Ok(())
}
