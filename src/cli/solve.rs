// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `rungs solve`: one query, answered on a writer.
//!
//! Exit status is part of the interface: 0 when a ladder is found, 2 when
//! the search completes without one, 1 for any error (bad query word,
//! unreadable dictionary, failed write).

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use rungs::{normalize_word, LadderSearch, Lexicon, SearchReport};

use super::display::{render_ladder, render_not_found, render_stats};
use super::SolveArgs;

pub const EXIT_FOUND: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_NO_LADDER: u8 = 2;

/// How a command that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A ladder was found, or the command has nothing to find.
    Success,
    NoLadder,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => EXIT_FOUND,
            Outcome::NoLadder => EXIT_NO_LADDER,
        }
    }
}

/// Exit status for a finished command, errors included.
pub fn exit_code(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(_) => EXIT_ERROR,
    }
}

/// JSON shape of `rungs solve --json`
#[derive(Serialize)]
struct SolveOutput<'a> {
    start: &'a str,
    target: &'a str,
    #[serde(flatten)]
    report: &'a SearchReport,
}

fn query_word(raw: &str) -> Result<String> {
    normalize_word(raw).ok_or_else(|| anyhow!("'{}' is not a word (letters only)", raw))
}

/// Normalize the query, load the dictionary and write the answer to `out`.
pub fn solve<W: Write>(args: &SolveArgs, out: &mut W, colors: bool) -> Result<Outcome> {
    let start = query_word(&args.start)?;
    let target = query_word(&args.target)?;
    let lexicon = args.dict.load()?;
    answer(&lexicon, &start, &target, args, out, colors)
}

fn answer<W: Write>(
    lexicon: &Lexicon,
    start: &str,
    target: &str,
    args: &SolveArgs,
    out: &mut W,
    colors: bool,
) -> Result<Outcome> {
    let report = LadderSearch::new(lexicon).run(start, target);

    if args.json {
        let output = SolveOutput {
            start,
            target,
            report: &report,
        };
        let serialized = serde_json::to_string_pretty(&output).context("serialize result")?;
        writeln!(out, "{}", serialized)?;
    } else {
        match &report.ladder {
            Some(ladder) => writeln!(out, "{}", render_ladder(ladder, args.reverse, colors))?,
            None => writeln!(
                out,
                "{}",
                render_not_found(start, target, args.reverse, colors)
            )?,
        }
        if args.stats {
            writeln!(out, "{}", render_stats(&report.stats, colors))?;
        }
    }

    Ok(if report.found() {
        Outcome::Success
    } else {
        Outcome::NoLadder
    })
}
