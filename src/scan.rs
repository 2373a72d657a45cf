//! Deck discovery and title resolution.
//!
//! Stage 1 of the talkdeck build pipeline. Lists the immediate children of the
//! content root, keeps the date-prefixed directories, and resolves a display
//! title for each, producing the [`Manifest`] the build and generate stages
//! consume.
//!
//! ## Directory Structure
//!
//! ```text
//! talks/                           # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── 2024-03-12-rust-intro/       # Deck folder (date prefix = included)
//! │   └── src/
//! │       ├── slides.md            # Deck source (title: line sets the title)
//! │       └── ...
//! ├── 2023-11-02-async-talk/
//! │   └── src/slides.md
//! ├── template/                    # No date prefix = ignored
//! └── dist/                        # Output root (never matches the pattern)
//! ```
//!
//! ## Ordering
//!
//! Decks are ordered by folder name, descending. With ISO-style date prefixes
//! (`YYYY-MM-DD-...`) descending lexicographic order is newest-first, which is
//! the order the index page lists them in.
//!
//! ## Title Resolution
//!
//! The deck source document may declare a title in its frontmatter:
//!
//! ```text
//! ---
//! title: Why Rust Is Fast
//! theme: default
//! ---
//! ```
//!
//! The first line starting with `title:` wins; its remainder, trimmed, is the
//! display title. Without such a line the folder name is the title. A folder
//! with no source document at all is marked `has_source = false`: the build
//! stage skips it and the index omits it.

use crate::config::{self, SiteConfig};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub decks: Vec<DeckInfo>,
    pub config: SiteConfig,
}

/// One discovered deck.
///
/// Created by the scanner, immutable afterwards. `folder` doubles as the
/// deck's URL path segment: the built deck is served under `/<folder>/`.
#[derive(Debug, Clone, Serialize)]
pub struct DeckInfo {
    /// Date-prefixed directory name, e.g. `2024-03-12-rust-intro`.
    pub folder: String,
    /// Display title: the `title:` declaration, or the folder name.
    pub title: String,
    /// Whether the deck source document exists. Sourceless decks are
    /// listed here for reporting but skipped by build and index.
    pub has_source: bool,
}

impl DeckInfo {
    /// The deck's source directory relative to the content root.
    pub fn source_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.folder).join("src")
    }
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let config = config::load_config(root)?;

    let mut folders: Vec<String> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| is_deck_folder(name))
        .collect();

    // Newest first: ISO date prefixes make this a reverse-chronological sort
    folders.sort_by(|a, b| b.cmp(a));

    let decks = folders
        .iter()
        .map(|folder| resolve_deck(root, folder, &config.renderer.slides_file))
        .collect();

    Ok(Manifest { decks, config })
}

/// Whether a directory name identifies a deck: four ASCII digits then a dash.
///
/// Matches `2024-03-12-rust-intro` and `2024-spring`, rejects `template`,
/// `dist`, `24-03-intro`, and hidden directories.
pub fn is_deck_folder(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(|b| b.is_ascii_digit()) && bytes[4] == b'-'
}

/// Resolve one folder into a [`DeckInfo`], reading its source document for a
/// `title:` declaration.
fn resolve_deck(root: &Path, folder: &str, slides_file: &str) -> DeckInfo {
    let slides_path = root.join(folder).join("src").join(slides_file);

    if !slides_path.exists() {
        eprintln!("warning: {folder}: no src/{slides_file}, deck will be skipped");
        return DeckInfo {
            folder: folder.to_string(),
            title: folder.to_string(),
            has_source: false,
        };
    }

    let title = match fs::read_to_string(&slides_path) {
        Ok(content) => extract_title(&content).unwrap_or_else(|| folder.to_string()),
        Err(err) => {
            eprintln!("warning: {folder}: could not read src/{slides_file} ({err}), using folder name as title");
            folder.to_string()
        }
    };

    DeckInfo {
        folder: folder.to_string(),
        title,
        has_source: true,
    }
}

/// Extract the declared title from deck source content.
///
/// The first line starting with `title:` (column zero, as Slidev frontmatter
/// puts it) yields its trimmed remainder. Lines where the remainder is empty
/// don't count as a declaration.
fn extract_title(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.strip_prefix("title:"))
        .map(str::trim)
        .find(|rest| !rest.is_empty())
        .map(str::to_string)
}
