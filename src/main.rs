use clap::{Parser, Subcommand};
use std::path::PathBuf;
use talkdeck::{build, generate, output, scan};

#[derive(Parser)]
#[command(name = "talkdeck")]
#[command(about = "Static site builder for dated Slidev talk decks")]
#[command(long_about = "\
Static site builder for dated Slidev talk decks

Your filesystem is the data source. Each date-prefixed directory is one
presentation, newest first on the generated index page.

Content structure:

  talks/
  ├── config.toml                  # Site config (optional)
  ├── 2024-03-12-rust-intro/       # Deck folder (date prefix = included)
  │   └── src/
  │       ├── slides.md            # Slidev source; 'title:' sets the title
  │       └── ...
  ├── 2023-11-02-async-talk/
  │   └── src/slides.md
  └── template/                    # No date prefix = ignored

Each deck is compiled with the configured renderer (default: pnpm exec
slidev) into dist/<folder>/, then an index.html linking all decks is
written at the output root. The output root is recreated on every run.")]
#[command(version)]
struct Cli {
    /// Content root containing the deck folders
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: scan → build decks → generate index
    Build,
    /// List the decks that would be built, without building
    Scan {
        /// Print the manifest as JSON instead of the inventory listing
        #[arg(long)]
        json: bool,
    },
    /// Validate the content root for CI: fails if no buildable deck exists
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);

            println!("\n==> Building decks → {}", cli.output.display());
            let summary = build::build(&manifest, &cli.source, &cli.output)?;
            println!();
            output::print_build_summary(&summary);

            println!("\n==> Generating index");
            generate::generate(&manifest, &cli.output)?;
            output::print_generate_output(summary.built.len());

            println!("\n==> Site ready at {}", cli.output.display());
        }
        Command::Scan { json } => {
            let manifest = scan::scan(&cli.source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                output::print_scan_output(&manifest);
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);
            if !manifest.decks.iter().any(|d| d.has_source) {
                return Err("no buildable decks found".into());
            }
            println!("==> Content is valid");
        }
    }

    Ok(())
}
