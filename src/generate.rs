//! Index page generation.
//!
//! Stage 3 of the talkdeck build pipeline. Renders the site's landing page:
//! one card per built deck, newest first, linking to `/<folder>/` with the
//! resolved title and the date-prefixed folder name as secondary text.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! The stylesheet is embedded at compile time from `static/style.css` and
//! inlined into the page, so the generated site is a self-contained tree of
//! deck directories plus a single `index.html`.

use crate::scan::Manifest;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Render the index page and write it to `<output_dir>/index.html`,
/// overwriting any prior file of that name.
pub fn generate(manifest: &Manifest, output_dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir)?;
    let index = render_index(manifest);
    fs::write(output_dir.join("index.html"), index.into_string())?;
    Ok(())
}

/// Renders the landing page listing all built decks.
///
/// Sourceless decks never made it into the output tree, so they are omitted
/// here too — the index only links to decks that exist.
pub fn render_index(manifest: &Manifest) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (manifest.config.site_title) }
                style { (CSS) }
            }
            body {
                h1 { (manifest.config.site_title) }
                div.deck-list {
                    @for deck in manifest.decks.iter().filter(|d| d.has_source) {
                        div.deck-item {
                            a.deck-link href={ "/" (deck.folder) "/" } {
                                div.deck-title { (deck.title) }
                                div.deck-date { (deck.folder) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::scan::DeckInfo;
    use tempfile::TempDir;

    fn manifest(decks: Vec<DeckInfo>) -> Manifest {
        Manifest {
            decks,
            config: SiteConfig::default(),
        }
    }

    fn deck(folder: &str, title: &str) -> DeckInfo {
        DeckInfo {
            folder: folder.to_string(),
            title: title.to_string(),
            has_source: true,
        }
    }

    #[test]
    fn index_links_each_deck() {
        let html = render_index(&manifest(vec![
            deck("2024-06-30-new", "The New Talk"),
            deck("2023-12-25-mid", "The Older Talk"),
        ]))
        .into_string();

        assert!(html.contains(r#"href="/2024-06-30-new/""#));
        assert!(html.contains(r#"href="/2023-12-25-mid/""#));
        assert!(html.contains("The New Talk"));
        assert!(html.contains("The Older Talk"));
    }

    #[test]
    fn index_shows_folder_as_date_line() {
        let html = render_index(&manifest(vec![deck("2024-06-30-new", "A Talk")])).into_string();
        assert!(html.contains(r#"<div class="deck-date">2024-06-30-new</div>"#));
    }

    #[test]
    fn index_preserves_manifest_order() {
        let html = render_index(&manifest(vec![
            deck("2024-06-30-new", "New"),
            deck("2022-01-01-old", "Old"),
        ]))
        .into_string();

        let new_pos = html.find("2024-06-30-new").unwrap();
        let old_pos = html.find("2022-01-01-old").unwrap();
        assert!(new_pos < old_pos);
    }

    #[test]
    fn index_omits_sourceless_decks() {
        let mut sourceless = deck("2024-05-01-empty", "Ghost");
        sourceless.has_source = false;

        let html =
            render_index(&manifest(vec![deck("2024-06-30-new", "Real"), sourceless])).into_string();

        assert!(html.contains("2024-06-30-new"));
        assert!(!html.contains("2024-05-01-empty"));
    }

    #[test]
    fn index_escapes_titles() {
        let html =
            render_index(&manifest(vec![deck("2024-06-30-new", "Q&A <live>")])).into_string();
        assert!(html.contains("Q&amp;A &lt;live&gt;"));
    }

    #[test]
    fn index_uses_configured_site_title() {
        let mut m = manifest(vec![]);
        m.config.site_title = "Team Brownbags".to_string();

        let html = render_index(&m).into_string();
        assert!(html.contains("<title>Team Brownbags</title>"));
        assert!(html.contains("<h1>Team Brownbags</h1>"));
    }

    #[test]
    fn generate_writes_index_html() {
        let tmp = TempDir::new().unwrap();
        let m = manifest(vec![deck("2024-06-30-new", "A Talk")]);

        generate(&m, tmp.path()).unwrap();

        let written = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("A Talk"));
    }

    #[test]
    fn generate_overwrites_existing_index() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("index.html"), "stale").unwrap();

        generate(&manifest(vec![]), tmp.path()).unwrap();

        let written = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(!written.contains("stale"));
    }
}
