// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the rungs CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `RUNGS_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then macOS system appearance, then defaults to dark.
//!
//! Ladders are printed with the substituted letter of every rung highlighted,
//! so the path reads at a glance. Respects `NO_COLOR` and non-TTY detection
//! for pipelines; the `render_*` functions take the color decision as an
//! argument so they can be tested without a terminal.
//!
//! # Theme detection order
//!
//! 1. `RUNGS_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rungs::{changed_position, Ladder, SearchStats};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 48;

// Widest histogram bar inside the inspect box
const BAR_WIDTH: usize = 28;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via RUNGS_THEME
    if let Ok(theme) = std::env::var("RUNGS_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    // 4. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on stdout (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Same check for stderr, where errors and prompts go
pub fn use_colors_stderr() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply theme color with optional modifiers, or nothing when `colors` is off
fn paint(colors: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if colors {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply theme color with optional modifiers if stdout is a TTY
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color_fn, modifiers, text)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}{}{}{}",
        themed(GRAY, &[], "│"),
        content,
        " ".repeat(pad),
        themed(GRAY, &[], "│")
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!(
        "{}",
        themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// One rung with its substituted letter highlighted against the previous rung.
fn rung(word: &str, previous: Option<&str>, colors: bool) -> String {
    let changed = previous.and_then(|prev| changed_position(prev, word));
    match changed {
        Some(pos) if colors => word
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let s = c.to_string();
                if i == pos {
                    paint(true, YELLOW, &[BOLD], &s)
                } else {
                    s
                }
            })
            .collect(),
        _ => word.to_string(),
    }
}

/// A found ladder: a header line and the rungs joined by arrows.
///
/// With `reverse` the ladder is listed from target back to start.
pub fn render_ladder(ladder: &Ladder, reverse: bool, colors: bool) -> String {
    let words: Vec<&str> = if reverse {
        ladder.iter().rev().collect()
    } else {
        ladder.iter().collect()
    };

    let header = if reverse {
        format!("Ladder from {} back to {}:", ladder.target(), ladder.start())
    } else {
        format!("Ladder from {} to {}:", ladder.start(), ladder.target())
    };

    let arrow = paint(colors, GRAY, &[], " -> ");
    let rendered: Vec<String> = words
        .iter()
        .enumerate()
        .map(|(i, word)| rung(word, i.checked_sub(1).map(|p| words[p]), colors))
        .collect();

    let count = match ladder.len() {
        1 => "1 word".to_string(),
        n => format!("{} words", n),
    };
    let steps = match ladder.steps() {
        1 => "1 step".to_string(),
        n => format!("{} steps", n),
    };

    format!(
        "{}\n{}\n{}",
        paint(colors, GREEN, &[BOLD], &header),
        rendered.join(arrow.as_str()),
        paint(colors, GRAY, &[DIM], &format!("({}, {})", count, steps))
    )
}

/// The "no ladder" outcome, worded to match [`render_ladder`] with the same `reverse`.
pub fn render_not_found(start: &str, target: &str, reverse: bool, colors: bool) -> String {
    let message = if reverse {
        format!("No word ladder found from {} back to {}", target, start)
    } else {
        format!("No word ladder found from {} to {}", start, target)
    };
    paint(colors, RED, &[], &message)
}

/// Search counters, one per line.
pub fn render_stats(stats: &SearchStats, colors: bool) -> String {
    let line = |label: &str, value: usize| {
        format!(
            "  {:<16}{}",
            label,
            paint(colors, CYAN, &[], &value.to_string())
        )
    };
    [
        line("expanded", stats.expanded),
        line("candidates", stats.candidates),
        line("enqueued", stats.enqueued),
        line("peak frontier", stats.peak_frontier),
    ]
    .join("\n")
}

/// Histogram rows for the inspect box: length, count and a proportional bar.
pub fn render_histogram(histogram: &BTreeMap<usize, usize>, colors: bool) -> Vec<String> {
    let max = histogram.values().copied().max().unwrap_or(0);
    histogram
        .iter()
        .map(|(len, count)| {
            let filled = if max == 0 {
                0
            } else {
                (count * BAR_WIDTH).div_ceil(max)
            };
            format!(
                " {:>3} {:>8}  {}",
                len,
                count,
                paint(colors, BRIGHT_CYAN, &[], &"━".repeat(filled))
            )
        })
        .collect()
}

/// Error line for stderr
pub fn render_error(message: &str) -> String {
    paint(use_colors_stderr(), RED, &[BOLD], &format!("❌ {}", message))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
