//! CLI binary for quote2meme.
//!
//! A thin shim over the library crate: it resolves an image and a quote
//! (explicit flags or random picks from the data directories), calls
//! [`MemeGenerator::make_meme`], and prints the resulting path.

use anyhow::{bail, Context, Result};
use clap::Parser;
use quote2meme::{Ingestor, MemeConfig, MemeGenerator, Quote};
use rand::seq::SliceRandom;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Random image, random quote
  quote2meme

  # Your own caption on a random image
  quote2meme --body "Good dog" --author "Unknown"

  # Everything explicit
  quote2meme --path photos/rex.jpg --body "Good dog" --author "Unknown"

  # Custom data directories and a wider output
  quote2meme --quotes ./my_quotes --images ./my_photos --width 800

  # Machine-readable output
  quote2meme --json

QUOTE FILE FORMATS:
  .txt    one quote per line:        body - author
  .csv    header row with columns:   body,author
  .docx   one quote per paragraph:   body - author
  .pdf    converted with pdftotext, then treated like .txt

  The LAST " - " on a line separates body from author, so bodies may
  contain the sequence themselves: "A - B - C" is body "A - B" by "C".

REQUIREMENTS:
  PDF ingestion shells out to `pdftotext` (poppler-utils). Without it,
  .pdf quote files are skipped with a warning.
"#;

/// Generate a meme from a quote and an image.
#[derive(Parser, Debug)]
#[command(
    name = "quote2meme",
    version,
    about = "Generate a captioned meme from quote files and images",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to an image file. Random pick from --images when omitted.
    #[arg(long)]
    path: Option<PathBuf>,

    /// Quote body to draw on the image. Requires --author.
    #[arg(long)]
    body: Option<String>,

    /// Quote author. Ignored without --body.
    #[arg(long)]
    author: Option<String>,

    /// Directory of quote files (.txt/.csv/.docx/.pdf) for random picks.
    #[arg(long, env = "QUOTE2MEME_QUOTES", default_value = "./_data/DogQuotes")]
    quotes: PathBuf,

    /// Directory of images for random picks.
    #[arg(long, env = "QUOTE2MEME_IMAGES", default_value = "./_data/photos/dog")]
    images: PathBuf,

    /// Directory to save generated memes into.
    #[arg(short, long, env = "QUOTE2MEME_OUTPUT", default_value = "./tmp")]
    output: PathBuf,

    /// Output image width in pixels.
    #[arg(long, env = "QUOTE2MEME_WIDTH", default_value_t = 500,
          value_parser = clap::value_parser!(u32).range(16..=4096))]
    width: u32,

    /// Print the result as JSON instead of a bare path.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "QUOTE2MEME_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "QUOTE2MEME_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Resolve quote and image ──────────────────────────────────────────
    let quote = match (&cli.body, &cli.author) {
        (Some(body), Some(author)) => {
            Quote::new(body, author).context("Invalid --body/--author")?
        }
        (Some(_), None) => bail!("--body requires --author"),
        _ => random_quote(&cli.quotes)?,
    };

    let image = match &cli.path {
        Some(path) => path.clone(),
        None => random_image(&cli.images)?,
    };

    // ── Generate ─────────────────────────────────────────────────────────
    let config = MemeConfig::builder()
        .target_width(cli.width)
        .build()
        .context("Invalid configuration")?;
    let generator = MemeGenerator::with_config(&cli.output, config);
    let path = generator
        .make_meme(&image, quote.body(), quote.author())
        .context("Meme generation failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "path": path,
                "body": quote.body(),
                "author": quote.author(),
            })
        );
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Ingest every supported quote file under `dir` and pick one quote at
/// random. Files that fail to ingest are skipped with a warning so one
/// bad file (or a missing `pdftotext`) doesn't sink the whole run.
fn random_quote(dir: &Path) -> Result<Quote> {
    let ingestor = Ingestor::new();
    let mut quotes = Vec::new();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read quotes directory {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        match ingestor.parse(&path) {
            Ok(parsed) => quotes.extend(parsed),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }

    quotes
        .choose(&mut rand::thread_rng())
        .cloned()
        .with_context(|| format!("No quotes found under {}", dir.display()))
}

/// Pick a random raster image from `dir`.
fn random_image(dir: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read images directory {}", dir.display()))?;
    let images: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| matches!(e, "png" | "jpg" | "jpeg"))
        })
        .collect();

    images
        .choose(&mut rand::thread_rng())
        .cloned()
        .with_context(|| format!("No images found under {}", dir.display()))
}
