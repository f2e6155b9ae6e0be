//! # quote2meme
//!
//! Ingest quotations from heterogeneous document formats and composite
//! them onto images.
//!
//! ## Why this crate?
//!
//! Quote collections accumulate in whatever format someone last saved
//! them in — a text file, a spreadsheet export, a Word document, a PDF.
//! Instead of demanding one canonical format, this crate normalises all
//! four into a single [`Quote`] type behind one dispatching entry point,
//! then turns any quote plus any raster image into a captioned JPEG.
//!
//! ## Pipeline Overview
//!
//! ```text
//! quote files (.txt/.csv/.docx/.pdf)
//!  │
//!  ├─ 1. Ingest   dispatch on extension, extract body/author pairs
//!  ├─ 2. Select   random or caller-supplied quote and image
//!  ├─ 3. Resize   proportional scale to the target width
//!  ├─ 4. Caption  greedy word wrap + deterministic text placement
//!  └─ 5. Save     uniquely named .jpg in the output directory
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quote2meme::{Ingestor, MemeGenerator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let quotes = Ingestor::new().parse("quotes/dogs.txt".as_ref())?;
//!     let generator = MemeGenerator::new("./tmp");
//!     let path = generator.make_meme(
//!         "photos/dog.jpg".as_ref(),
//!         quotes[0].body(),
//!         quotes[0].author(),
//!     )?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `quote2meme` binary (clap + rand + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! quote2meme = { version = "0.3", default-features = false }
//! ```
//!
//! ## Format Conventions
//!
//! Line-oriented sources (`.txt`, `.pdf` via `pdftotext`, `.docx`
//! paragraphs) hold one quote per line in `body - author` form; the
//! **last** `" - "` occurrence is the author boundary, so bodies may
//! themselves contain the sequence. `.csv` files carry `body` and
//! `author` columns, located by header name. Malformed lines and rows
//! are skipped; unreadable files are errors.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod ingest;
pub mod meme;
pub mod quote;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{MemeConfig, MemeConfigBuilder};
pub use error::Quote2MemeError;
pub use ingest::{Ingestor, QuoteParser};
pub use meme::wrap::wrap_text;
pub use meme::MemeGenerator;
pub use quote::Quote;
