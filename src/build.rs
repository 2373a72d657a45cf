//! Deck building.
//!
//! Stage 2 of the talkdeck build pipeline. Takes the scan manifest, recreates
//! the output root from scratch, and runs the renderer once per deck.
//!
//! ## Output Structure
//!
//! ```text
//! dist/                            # Deleted and recreated every run
//! ├── index.html                   # Written later by the generate stage
//! ├── 2024-03-12-rust-intro/       # Renderer-controlled contents
//! │   └── ...
//! └── 2023-11-02-async-talk/
//!     └── ...
//! ```
//!
//! ## Sequencing and Failure
//!
//! Decks build strictly one at a time, newest first, each subprocess awaited
//! to completion before the next starts. The first renderer failure aborts
//! the run: no further decks are attempted and the error propagates to the
//! CLI, which exits nonzero. Decks without a source document are skipped
//! (the scan stage already warned about them).

use crate::renderer::{DeckRenderer, RenderRequest, RendererError, SlidevRenderer};
use crate::scan::Manifest;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}

/// What the build stage did, for CLI reporting.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Folders built, in build order (newest first).
    pub built: Vec<String>,
    /// Folders skipped for lack of a source document.
    pub skipped: Vec<String>,
}

/// Build all decks from the manifest with the configured Slidev command.
pub fn build(manifest: &Manifest, root: &Path, output_dir: &Path) -> Result<BuildSummary, BuildError> {
    let renderer = SlidevRenderer::new(manifest.config.renderer.clone());
    build_with_renderer(&renderer, manifest, root, output_dir)
}

/// Build using a specific renderer (allows testing with a mock).
///
/// Recreates `output_dir` from scratch first, so no artifact from a previous
/// run survives, then renders each buildable deck in manifest order.
pub fn build_with_renderer(
    renderer: &impl DeckRenderer,
    manifest: &Manifest,
    root: &Path,
    output_dir: &Path,
) -> Result<BuildSummary, BuildError> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)?;
    }
    fs::create_dir_all(output_dir)?;

    let mut summary = BuildSummary::default();

    for deck in &manifest.decks {
        if !deck.has_source {
            summary.skipped.push(deck.folder.clone());
            continue;
        }

        println!("\nBuilding {}...", deck.folder);
        renderer.render(&RenderRequest {
            folder: &deck.folder,
            source_dir: &deck.source_dir(root),
            output_dir: &output_dir.join(&deck.folder),
        })?;

        summary.built.push(deck.folder.clone());
    }

    Ok(summary)
}
