use crate::handlers::display_path;
use crate::presentation::Style;
use crate::prompt::Prompter;
use anyhow::{Result, bail};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use writerops_runtime::Classifier;
use writerops_runtime::ops::{self, FinishInput};
use writerops_store::Store;
use writerops_types::Difficulty;

pub struct FinishFlags {
    pub chars: Option<u64>,
    pub difficulty: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub emergency: bool,
    pub date: NaiveDate,
}

pub fn handle<R: BufRead, W: Write>(
    store: &Store,
    classifier: &Classifier<'_>,
    prompter: &mut Prompter<R, W>,
    flags: FinishFlags,
    style: Style,
) -> Result<()> {
    let char_count = match flags.chars {
        Some(n) => n,
        None => parse_char_count(&require(prompter, "오늘 쓴 글자수? ", "character count")?)?,
    };

    let difficulty = match flags.difficulty {
        Some(raw) => Difficulty::parse(&raw)?,
        None => Difficulty::parse(&require(
            prompter,
            "체감 난이도? (1/2/3 또는 ★/★★/★★★) ",
            "difficulty",
        )?)?,
    };

    let summary = match flags.summary {
        Some(s) => s,
        None => require(prompter, "장면 한줄 요약? ", "scene summary")?,
    };

    let outcome = ops::finish(
        store,
        classifier,
        FinishInput {
            date: flags.date,
            char_count,
            difficulty,
            summary,
            location: flags.location,
            emergency_mode: flags.emergency,
        },
    )?;

    println!("기록 저장: {}", display_path(store, &outcome.record_path));
    println!("{}", style.role_line(&outcome.role));
    if let Some(highlight) = &outcome.highlight {
        println!("하이라이트 추가: {}", style.highlight_line(highlight));
    }
    println!("{}", style.progress_line(outcome.record.char_count, &outcome.progress));

    Ok(())
}

fn require<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    question: &str,
    field: &str,
) -> Result<String> {
    match prompter.ask(question)? {
        Some(answer) if !answer.is_empty() => Ok(answer),
        _ => bail!("Invalid input: {} is required", field),
    }
}

/// Accepts plain digits with optional thousands separators ("1,200")
fn parse_char_count(raw: &str) -> Result<u64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    match cleaned.trim().parse::<u64>() {
        Ok(n) => Ok(n),
        Err(_) => bail!(
            "Invalid input: character count must be a non-negative number, got '{}'",
            raw
        ),
    }
}
