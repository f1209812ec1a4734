// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rungs command-line interface.
//!
//! Three subcommands: `solve` for a single query, `play` for the interactive
//! prompt loop, and `inspect` to summarize a word list. All of them read the
//! dictionary from `--dict`, falling back to `RUNGS_DICT` and then to
//! `dictionary.txt` in the working directory.

pub mod display;
pub mod session;
pub mod solve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rungs::{BlankLines, Lexicon, LoadOptions};

#[derive(Parser)]
#[command(
    name = "rungs",
    about = "Shortest word ladders through a dictionary",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the dictionary comes from and how it is read.
#[derive(Args, Debug, Clone)]
pub struct DictArgs {
    /// Word list, one word per line
    #[arg(short, long, env = "RUNGS_DICT", default_value = "dictionary.txt")]
    pub dict: PathBuf,

    /// Fail on blank lines in the word list instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Lowercase every dictionary entry while loading
    #[arg(long)]
    pub fold_case: bool,
}

impl DictArgs {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            blank_lines: if self.strict {
                BlankLines::Reject
            } else {
                BlankLines::Skip
            },
            lowercase: self.fold_case,
        }
    }

    /// Load the dictionary these arguments point at.
    pub fn load(&self) -> Result<Lexicon> {
        tracing::info!(path = %self.dict.display(), "loading dictionary");
        let lexicon = Lexicon::load_with(&self.dict, &self.load_options())
            .with_context(|| format!("Failed to load dictionary {}", self.dict.display()))?;
        tracing::info!(words = lexicon.len(), "dictionary loaded");
        Ok(lexicon)
    }
}

/// Arguments of `rungs solve`.
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Word to start from
    pub start: String,

    /// Word to reach
    pub target: String,

    #[command(flatten)]
    pub dict: DictArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// List the ladder from target back to start
    #[arg(long)]
    pub reverse: bool,

    /// Show search counters after the ladder
    #[arg(long)]
    pub stats: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the shortest ladder between two words
    Solve(SolveArgs),

    /// Ask for word pairs interactively until a blank line
    Play {
        #[command(flatten)]
        dict: DictArgs,

        /// List ladders from target back to start
        #[arg(long)]
        reverse: bool,
    },

    /// Summarize a word list
    Inspect {
        #[command(flatten)]
        dict: DictArgs,
    },
}
