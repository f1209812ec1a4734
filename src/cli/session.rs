// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive prompt loop behind `rungs play`.
//!
//! Reads one line per query, answers it, and asks again. A blank line or end
//! of input ends the session. Generic over reader and writer so the whole
//! conversation can be driven from a test.

use std::io::{self, BufRead, Write};

use rungs::{normalize_word, LadderSearch, Lexicon};

use super::display::{render_ladder, render_not_found};

const WELCOME: &str = "Welcome to Word Ladder.\n\
If you give me two English words, I will transform the\n\
first into the second by changing one letter at a time.\n";

const PROMPT: &str = "Please type two words: ";

const FAREWELL: &str = "Have a nice day.";

/// How answers are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub reverse: bool,
    pub colors: bool,
}

/// One line of user input, classified.
#[derive(Debug, PartialEq, Eq)]
enum Query {
    Quit,
    Pair(String, String),
    Invalid(String),
}

fn parse_query(line: &str) -> Query {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Query::Quit,
        [first, second] => match (normalize_word(first), normalize_word(second)) {
            (Some(start), Some(target)) => Query::Pair(start, target),
            (None, _) => Query::Invalid(format!("'{}' is not a word (letters only).", first)),
            (_, None) => Query::Invalid(format!("'{}' is not a word (letters only).", second)),
        },
        _ => Query::Invalid("Please type exactly two words.".to_string()),
    }
}

/// Run the prompt loop until a blank line or end of input.
///
/// Returns the number of queries answered.
pub fn play<R: BufRead, W: Write>(
    lexicon: &Lexicon,
    mut input: R,
    out: &mut W,
    options: SessionOptions,
) -> io::Result<usize> {
    let search = LadderSearch::new(lexicon);
    let mut answered = 0;
    let mut line = String::new();

    writeln!(out, "{}", WELCOME)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_query(&line) {
            Query::Quit => break,
            Query::Invalid(message) => writeln!(out, "{}", message)?,
            Query::Pair(start, target) => {
                let report = search.run(&start, &target);
                tracing::info!(
                    start = %start,
                    target = %target,
                    found = report.found(),
                    expanded = report.stats.expanded,
                    "answered query"
                );
                match report.ladder {
                    Some(ladder) => {
                        writeln!(out, "{}", render_ladder(&ladder, options.reverse, options.colors))?
                    }
                    None => writeln!(
                        out,
                        "{}",
                        render_not_found(&start, &target, options.reverse, options.colors)
                    )?,
                }
                answered += 1;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", FAREWELL)?;
    Ok(answered)
}
