//! Shortest word ladders by breadth-first search.
//!
//! A word ladder connects two words of the same length by changing one letter
//! at a time, where every intermediate word must be in a dictionary:
//!
//! ```text
//! code -> cade -> cate -> date -> data
//! ```
//!
//! This crate finds a shortest such ladder, or reports that none exists.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌────────────────┐
//! │  lexicon.rs  │────▶│  search/mod.rs   │────▶│    types.rs    │
//! │  (Lexicon,   │     │ (LadderSearch,   │     │   (Ladder,     │
//! │   load)      │     │  find_ladder)    │     │  SearchReport) │
//! └──────────────┘     └──────────────────┘     └────────────────┘
//!        │                 │            │
//!        ▼                 ▼            ▼
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │   error.rs   │  │ neighbors.rs │  │   arena.rs   │
//! │ (LexiconError│  │ (candidate   │  │ (predecessor │
//! │  taxonomy)   │  │  order)      │  │  chains)     │
//! └──────────────┘  └──────────────┘  └──────────────┘
//! ```
//!
//! The search only asks the lexicon `contains`. The lexicon is passed in by
//! reference, never held globally, so one loaded word list serves any number
//! of searches.
//!
//! # Usage
//!
//! ```
//! use rungs::{find_ladder, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["code", "cade", "cate", "date", "data"]);
//! let ladder = find_ladder("code", "data", &lexicon).expect("ladder exists");
//! assert_eq!(ladder.len(), 5);
//! assert_eq!(ladder.to_string(), "code -> cade -> cate -> date -> data");
//! ```
//!
//! Queries are expected in normalized form (lowercase ASCII letters). Use
//! [`normalize_word`] on user input first.

// Module declarations
mod error;
mod lexicon;
mod search;
mod types;
mod utils;

pub mod testing;

// Re-exports for public API
pub use error::LexiconError;
pub use lexicon::{BlankLines, Lexicon, LoadOptions};
pub use search::{find_ladder, neighbors, LadderSearch, Neighbors, ALPHABET};
pub use types::{Ladder, SearchReport, SearchStats, RUNG_SEPARATOR};
pub use utils::{changed_position, normalize_word, substitution_distance};
