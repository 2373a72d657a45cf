//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the content
//! root. All options have stock defaults; a config file only needs the keys
//! it wants to override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Talks"          # Heading and <title> of the index page
//!
//! [renderer]
//! command = "pnpm"              # Renderer executable
//! args = ["exec", "slidev"]     # Leading args (the build action is appended)
//! slides_file = "slides.md"     # Deck source document inside <folder>/src/
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Heading and `<title>` of the generated index page.
    #[serde(default = "default_site_title")]
    pub site_title: String,
    /// External renderer invocation settings.
    pub renderer: RendererConfig,
}

fn default_site_title() -> String {
    "Talks".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            renderer: RendererConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.renderer.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "renderer.command must not be empty".into(),
            ));
        }
        if self.renderer.slides_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "renderer.slides_file must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// External renderer invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Executable to invoke.
    pub command: String,
    /// Arguments placed before the `build` action.
    pub args: Vec<String>,
    /// Name of the deck source document inside each deck's `src/` directory.
    pub slides_file: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            command: "pnpm".to_string(),
            args: vec!["exec".to_string(), "slidev".to_string()],
            slides_file: "slides.md".to_string(),
        }
    }
}

/// Load `config.toml` from the content root, falling back to defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}
