//! Meme compositing: load → resize → wrap → draw → save.
//!
//! Each submodule implements exactly one transformation step; this module
//! owns the orchestration and the output directory.
//!
//! ## Data Flow
//!
//! ```text
//! image path ──▶ load ──▶ resize ──▶ draw ──▶ save
//!               (decode)  (nearest,  (wrap +  (unique .jpg in
//!                          fixed w)   caption)  output dir)
//! ```
//!
//! The loaded image is a local inside one [`MemeGenerator::make_meme`]
//! call — no state survives between calls, so a single generator can be
//! shared freely and used for any number of memes.

pub mod draw;
pub mod wrap;

use crate::config::MemeConfig;
use crate::error::Quote2MemeError;
use image::imageops::FilterType;
use image::ImageFormat;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Composites a quote onto an image and saves the result.
///
/// # Example
/// ```rust,no_run
/// use quote2meme::MemeGenerator;
///
/// let generator = MemeGenerator::new("./tmp");
/// let path = generator.make_meme("dog.jpg".as_ref(), "Good dog", "Unknown")?;
/// println!("saved {}", path.display());
/// # Ok::<(), quote2meme::Quote2MemeError>(())
/// ```
pub struct MemeGenerator {
    output_dir: PathBuf,
    config: MemeConfig,
}

impl MemeGenerator {
    /// Create a generator saving into `output_dir` with default layout
    /// configuration.
    ///
    /// The directory is created on first save, not here.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(output_dir, MemeConfig::default())
    }

    /// Create a generator with explicit layout configuration.
    pub fn with_config(output_dir: impl Into<PathBuf>, config: MemeConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            config,
        }
    }

    /// The layout configuration in use.
    pub fn config(&self) -> &MemeConfig {
        &self.config
    }

    /// Generate a meme: the image at `image_path`, captioned with `body`
    /// and `author`, saved under a unique name in the output directory.
    ///
    /// # Errors
    /// - [`Quote2MemeError::ImageLoad`] — missing path or undecodable image
    /// - [`Quote2MemeError::DirectoryCreation`] — output directory cannot
    ///   be created or written
    pub fn make_meme(
        &self,
        image_path: &Path,
        body: &str,
        author: &str,
    ) -> Result<PathBuf, Quote2MemeError> {
        info!("generating meme from {}", image_path.display());

        // ── Step 1: Load ─────────────────────────────────────────────────
        let decoded = image::open(image_path).map_err(|e| Quote2MemeError::ImageLoad {
            path: image_path.to_path_buf(),
            source: e,
        })?;
        let rgb = decoded.to_rgb8();

        // ── Step 2: Resize to the target width, preserving aspect ────────
        let new_w = self.config.target_width;
        let new_h = scaled_height(rgb.width(), rgb.height(), new_w);
        let mut img = image::imageops::resize(&rgb, new_w, new_h, FilterType::Nearest);
        debug!(
            "resized {}x{} -> {}x{}",
            rgb.width(),
            rgb.height(),
            new_w,
            new_h
        );

        // ── Step 3 & 4: Wrap the body and draw the caption ───────────────
        let wrapped = wrap::wrap_text(body, self.config.wrap_width);
        draw::draw_caption(&mut img, &wrapped, author, &self.config)?;

        // ── Step 5: Save under a unique name ─────────────────────────────
        let path = self.save(&img)?;
        info!("meme saved to {}", path.display());
        Ok(path)
    }

    /// Persist the composited image as a uniquely named `.jpg` inside the
    /// output directory, creating the directory recursively if absent.
    fn save(&self, img: &image::RgbImage) -> Result<PathBuf, Quote2MemeError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| Quote2MemeError::DirectoryCreation {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let temp = tempfile::Builder::new()
            .prefix("meme-")
            .suffix(".jpg")
            .tempfile_in(&self.output_dir)
            .map_err(|e| Quote2MemeError::DirectoryCreation {
                path: self.output_dir.clone(),
                source: e,
            })?;
        let (file, path) = temp
            .keep()
            .map_err(|e| Quote2MemeError::Internal(format!("failed to keep output file: {e}")))?;

        let mut writer = BufWriter::new(file);
        img.write_to(&mut writer, ImageFormat::Jpeg)
            .map_err(|e| Quote2MemeError::Internal(format!("failed to encode jpeg: {e}")))?;
        writer
            .flush()
            .map_err(|e| Quote2MemeError::Internal(format!("failed to flush output file: {e}")))?;

        Ok(path)
    }
}

/// Output height for a proportional resize to `target_w`:
/// `round(orig_h × target_w / orig_w)`, floored at 1 px.
fn scaled_height(orig_w: u32, orig_h: u32, target_w: u32) -> u32 {
    let aspect = f64::from(target_w) / f64::from(orig_w);
    ((f64::from(orig_h) * aspect).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_height_rounds_to_nearest() {
        // 333 * 500/1000 = 166.5 -> 167 (round, not truncate)
        assert_eq!(scaled_height(1000, 333, 500), 167);
        assert_eq!(scaled_height(800, 600, 500), 375);
        // Upscaling works too.
        assert_eq!(scaled_height(100, 50, 500), 250);
    }

    #[test]
    fn scaled_height_never_hits_zero() {
        assert_eq!(scaled_height(10_000, 1, 500), 1);
    }

    #[test]
    fn missing_image_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let generator = MemeGenerator::new(dir.path());
        let err = generator
            .make_meme(Path::new("/no/such/image.png"), "body", "author")
            .unwrap_err();
        assert!(matches!(err, Quote2MemeError::ImageLoad { .. }));
    }
}
