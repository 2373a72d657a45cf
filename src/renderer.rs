//! Deck rendering backend trait and the Slidev subprocess implementation.
//!
//! The [`DeckRenderer`] trait is the seam between the build loop and the
//! external slide compiler, so the loop's clean/order/fail-fast logic is
//! testable without spawning processes.
//!
//! The production implementation is [`SlidevRenderer`]: one subprocess per
//! deck, run with the deck's `src/` directory as working directory so Slidev
//! resolves the deck's own theme and assets. The child inherits stdin, stdout,
//! and stderr; Slidev's progress output streams straight to the console.

use crate::config::RendererConfig;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Failed to spawn renderer for {folder}: {source}")]
    Spawn {
        folder: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Renderer failed for {folder} ({status})")]
    Failed { folder: String, status: ExitStatus },
}

/// A single render request: compile one deck into one output directory.
#[derive(Debug)]
pub struct RenderRequest<'a> {
    /// Deck folder name; also the URL path segment the deck is served under.
    pub folder: &'a str,
    /// The deck's source directory (`<root>/<folder>/src`).
    pub source_dir: &'a Path,
    /// Where the compiled deck lands (`<out>/<folder>`).
    pub output_dir: &'a Path,
}

impl RenderRequest<'_> {
    /// Base URL path prefix passed to the renderer: `/<folder>/`.
    pub fn base_path(&self) -> String {
        format!("/{}/", self.folder)
    }
}

/// Trait for deck rendering backends.
pub trait DeckRenderer {
    /// Compile one deck. Blocks until the render completes; any failure is
    /// final (the build loop never retries).
    fn render(&self, request: &RenderRequest) -> Result<(), RendererError>;
}

/// Runs the configured Slidev command as a subprocess.
pub struct SlidevRenderer {
    config: RendererConfig,
}

impl SlidevRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }
}

impl DeckRenderer for SlidevRenderer {
    fn render(&self, request: &RenderRequest) -> Result<(), RendererError> {
        // Inherited stdio keeps Slidev's progress output live on the console
        let status = Command::new(&self.config.command)
            .args(&self.config.args)
            .arg("build")
            .arg("--base")
            .arg(request.base_path())
            .arg("--out")
            .arg(request.output_dir)
            .current_dir(request.source_dir)
            .status()
            .map_err(|source| RendererError::Spawn {
                folder: request.folder.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(RendererError::Failed {
                folder: request.folder.to_string(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Recorded render invocation: (folder, base path, output dir).
    pub type RecordedRender = (String, String, String);

    /// Mock renderer that records requests without spawning anything.
    /// Optionally fails on a named folder so tests can exercise fail-fast.
    #[derive(Default)]
    pub struct MockRenderer {
        pub renders: RefCell<Vec<RecordedRender>>,
        pub fail_on: Option<String>,
        /// When set, the mock creates the requested output directory, like a
        /// real renderer would.
        pub create_output: bool,
    }

    impl MockRenderer {
        pub fn new() -> Self {
            Self {
                create_output: true,
                ..Self::default()
            }
        }

        pub fn failing_on(folder: &str) -> Self {
            Self {
                fail_on: Some(folder.to_string()),
                create_output: true,
                ..Self::default()
            }
        }

        pub fn recorded(&self) -> Vec<RecordedRender> {
            self.renders.borrow().clone()
        }
    }

    impl DeckRenderer for MockRenderer {
        fn render(&self, request: &RenderRequest) -> Result<(), RendererError> {
            if self.fail_on.as_deref() == Some(request.folder) {
                return Err(RendererError::Spawn {
                    folder: request.folder.to_string(),
                    source: std::io::Error::other("mock failure"),
                });
            }
            if self.create_output {
                std::fs::create_dir_all(request.output_dir).unwrap();
                std::fs::write(request.output_dir.join("index.html"), "<html>deck</html>")
                    .unwrap();
            }
            self.renders.borrow_mut().push((
                request.folder.to_string(),
                request.base_path(),
                request.output_dir.to_string_lossy().to_string(),
            ));
            Ok(())
        }
    }

    #[test]
    fn base_path_wraps_folder_in_slashes() {
        let request = RenderRequest {
            folder: "2024-03-12-rust-intro",
            source_dir: Path::new("/talks/2024-03-12-rust-intro/src"),
            output_dir: Path::new("/talks/dist/2024-03-12-rust-intro"),
        };
        assert_eq!(request.base_path(), "/2024-03-12-rust-intro/");
    }

    #[test]
    fn mock_records_renders_in_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let renderer = MockRenderer::new();

        for folder in ["2024-06-30-new", "2023-12-25-mid"] {
            renderer
                .render(&RenderRequest {
                    folder,
                    source_dir: tmp.path(),
                    output_dir: &tmp.path().join(folder),
                })
                .unwrap();
        }

        let folders: Vec<String> = renderer.recorded().into_iter().map(|r| r.0).collect();
        assert_eq!(folders, vec!["2024-06-30-new", "2023-12-25-mid"]);
    }

    #[test]
    fn mock_fails_on_configured_folder() {
        let tmp = tempfile::TempDir::new().unwrap();
        let renderer = MockRenderer::failing_on("2024-06-30-broken");

        let result = renderer.render(&RenderRequest {
            folder: "2024-06-30-broken",
            source_dir: tmp.path(),
            output_dir: &tmp.path().join("out"),
        });

        assert!(matches!(result, Err(RendererError::Spawn { .. })));
        assert!(renderer.recorded().is_empty());
    }
}
