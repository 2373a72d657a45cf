//! # talkdeck
//!
//! A minimal static site builder for dated talk decks. Your filesystem is the
//! data source: each date-prefixed directory (`2024-03-12-rust-intro/`) is one
//! presentation, authored as a Slidev deck under `<folder>/src/slides.md`.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan      root/      →  Manifest          (filesystem → deck inventory)
//! 2. Build     manifest   →  dist/<folder>/    (one renderer run per deck)
//! 3. Generate  manifest   →  dist/index.html   (landing page listing decks)
//! ```
//!
//! The stages are deliberately sequential: decks build one at a time, each
//! renderer subprocess awaited to completion before the next starts, so the
//! console output stays ordered and readable. The output root is deleted and
//! recreated on every run — no stale artifacts survive a rebuild.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — discovers date-prefixed deck folders, resolves titles |
//! | [`build`] | Stage 2 — cleans the output root and runs the renderer per deck |
//! | [`generate`] | Stage 3 — renders the `index.html` landing page with Maud |
//! | [`renderer`] | The [`DeckRenderer`](renderer::DeckRenderer) seam over the Slidev subprocess |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Fail-Fast Builds
//!
//! A renderer failure for any deck aborts the entire run with a nonzero exit.
//! The alternative of skipping the broken deck and publishing the rest would
//! let CI ship a half-built site with dead index links. There is no
//! partial-success state: a run either produces the whole site or nothing
//! usable.
//!
//! ## Maud Over Template Engines
//!
//! The index page is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system. Malformed HTML is a build error, template
//! variables are Rust expressions, interpolation is auto-escaped, and there is
//! no template file to ship or get out of sync.
//!
//! ## Missing Source: Skip, With a Warning
//!
//! A folder matching the date pattern but lacking `src/slides.md` is reported
//! and skipped: the renderer would fail on it anyway, and skipping keeps the
//! index free of links to decks that were never built. A *present but
//! unreadable* source file only costs the deck its declared title — the folder
//! name stands in and the build proceeds.

pub mod build;
pub mod config;
pub mod generate;
pub mod output;
pub mod renderer;
pub mod scan;
