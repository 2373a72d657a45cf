//! CLI output formatting for all pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Decks
//! 001 Why Rust Is Fast
//!     Source: 2024-03-12-rust-intro/src/slides.md
//! 002 2024-01-05-untitled
//!     Source: 2024-01-05-untitled/src/slides.md
//! 003 2023-09-01-draft (no source, will be skipped)
//! ```
//!
//! ## Build + Generate
//!
//! ```text
//! Built 2 decks, skipped 1
//! Generated index.html (2 decks)
//! ```

use crate::build::BuildSummary;
use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the scan stage output: the deck inventory, newest first.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Decks".to_string()];

    if manifest.decks.is_empty() {
        lines.push(format!("{}(none found)", indent(1)));
        return lines;
    }

    for (pos, deck) in manifest.decks.iter().enumerate() {
        if deck.has_source {
            lines.push(format!("{} {}", format_index(pos + 1), deck.title));
            lines.push(format!(
                "{}Source: {}/src/{}",
                indent(1),
                deck.folder,
                manifest.config.renderer.slides_file
            ));
        } else {
            lines.push(format!(
                "{} {} (no source, will be skipped)",
                format_index(pos + 1),
                deck.folder
            ));
        }
    }

    lines
}

/// Format the build stage summary line.
pub fn format_build_summary(summary: &BuildSummary) -> Vec<String> {
    let decks = if summary.built.len() == 1 { "deck" } else { "decks" };
    let mut line = format!("Built {} {}", summary.built.len(), decks);
    if !summary.skipped.is_empty() {
        line.push_str(&format!(", skipped {}", summary.skipped.len()));
    }
    vec![line]
}

/// Format the generate stage summary line.
pub fn format_generate_output(deck_count: usize) -> Vec<String> {
    let decks = if deck_count == 1 { "deck" } else { "decks" };
    vec![format!("Generated index.html ({deck_count} {decks})")]
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

pub fn print_build_summary(summary: &BuildSummary) {
    for line in format_build_summary(summary) {
        println!("{line}");
    }
}

pub fn print_generate_output(deck_count: usize) {
    for line in format_generate_output(deck_count) {
        println!("{line}");
    }
}
