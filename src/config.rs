//! Configuration for meme compositing.
//!
//! Every layout knob lives in [`MemeConfig`], built via its
//! [`MemeConfigBuilder`]. Keeping the knobs in one struct makes it trivial
//! to share a config across generators, serialise it for logging, and diff
//! two runs to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! Layout parameters accumulate; a positional constructor breaks on every
//! new field. The builder lets callers set only what they care about and
//! rely on documented defaults for the rest.

use crate::error::Quote2MemeError;
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::MemeGenerator`].
///
/// # Example
/// ```rust
/// use quote2meme::MemeConfig;
///
/// let config = MemeConfig::builder()
///     .target_width(640)
///     .wrap_width(30)
///     .build()
///     .unwrap();
/// assert_eq!(config.target_width, 640);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemeConfig {
    /// Output image width in pixels. Range: 16–4096. Default: 500.
    ///
    /// The image is scaled to this width; height follows from the source
    /// aspect ratio as `round(orig_h × target_width / orig_w)`.
    pub target_width: u32,

    /// Maximum characters per wrapped body line. Default: 25.
    ///
    /// 25 columns of ~20 px glyphs stay comfortably inside a 500 px wide
    /// image. A single word longer than this occupies its own line
    /// unbroken; the wrapper never splits words.
    pub wrap_width: usize,

    /// Body text size in pixels. Default: 20.0.
    pub body_px: f32,

    /// Author line text size in pixels. Default: 25.0.
    ///
    /// Slightly larger than the body so the attribution reads as a
    /// signature rather than a caption continuation.
    pub author_px: f32,

    /// Margin from the image edges for both text blocks, in pixels.
    /// Default: 20.
    pub margin: u32,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            target_width: 500,
            wrap_width: 25,
            body_px: 20.0,
            author_px: 25.0,
            margin: 20,
        }
    }
}

impl MemeConfig {
    /// Create a new builder for `MemeConfig`.
    pub fn builder() -> MemeConfigBuilder {
        MemeConfigBuilder {
            config: Self::default(),
        }
    }

    /// Vertical advance between wrapped body lines, in pixels.
    pub(crate) fn line_advance(&self) -> u32 {
        (self.body_px * 1.2).ceil() as u32
    }
}

/// Builder for [`MemeConfig`].
#[derive(Debug)]
pub struct MemeConfigBuilder {
    config: MemeConfig,
}

impl MemeConfigBuilder {
    pub fn target_width(mut self, px: u32) -> Self {
        self.config.target_width = px;
        self
    }

    pub fn wrap_width(mut self, columns: usize) -> Self {
        self.config.wrap_width = columns.max(1);
        self
    }

    pub fn body_px(mut self, px: f32) -> Self {
        self.config.body_px = px.clamp(6.0, 120.0);
        self
    }

    pub fn author_px(mut self, px: f32) -> Self {
        self.config.author_px = px.clamp(6.0, 120.0);
        self
    }

    pub fn margin(mut self, px: u32) -> Self {
        self.config.margin = px;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<MemeConfig, Quote2MemeError> {
        let c = &self.config;
        if c.target_width < 16 || c.target_width > 4096 {
            return Err(Quote2MemeError::InvalidConfig(format!(
                "target width must be 16–4096 px, got {}",
                c.target_width
            )));
        }
        if c.margin.saturating_mul(2) >= c.target_width {
            return Err(Quote2MemeError::InvalidConfig(format!(
                "margin {} leaves no room inside a {} px wide image",
                c.margin, c.target_width
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = MemeConfig::default();
        assert_eq!(c.target_width, 500);
        assert_eq!(c.wrap_width, 25);
        assert_eq!(c.margin, 20);
    }

    #[test]
    fn zero_width_rejected() {
        let err = MemeConfig::builder().target_width(0).build().unwrap_err();
        assert!(matches!(err, Quote2MemeError::InvalidConfig(_)));
    }

    #[test]
    fn oversized_margin_rejected() {
        let err = MemeConfig::builder()
            .target_width(100)
            .margin(50)
            .build()
            .unwrap_err();
        assert!(matches!(err, Quote2MemeError::InvalidConfig(_)));
    }

    #[test]
    fn wrap_width_floor_is_one() {
        let c = MemeConfig::builder().wrap_width(0).build().unwrap();
        assert_eq!(c.wrap_width, 1);
    }
}
