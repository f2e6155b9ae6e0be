//! Caption placement and text rendering.
//!
//! Placement is deterministic: the body block flows down from a fixed
//! top-left offset, one drawn line per wrapped line, and the author line
//! is anchored a fixed offset above the bottom edge. Identical inputs
//! always produce identical pixels. Body-above, author-below keeps the
//! two blocks disjoint for typical inputs; containment is not guaranteed
//! for arbitrarily long text.
//!
//! The font face is an embedded DejaVuSans, so rendering needs no
//! system font lookup and behaves the same on every host.

use crate::config::MemeConfig;
use crate::error::Quote2MemeError;
use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

const FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Parse the embedded font face.
fn load_font() -> Result<FontRef<'static>, Quote2MemeError> {
    FontRef::try_from_slice(FONT_BYTES)
        .map_err(|e| Quote2MemeError::Internal(format!("embedded font failed to parse: {e}")))
}

/// Draw the wrapped body text and the `- author` line onto the image.
pub(crate) fn draw_caption(
    img: &mut RgbImage,
    wrapped_body: &str,
    author: &str,
    config: &MemeConfig,
) -> Result<(), Quote2MemeError> {
    let font = load_font()?;
    let body_scale = PxScale::from(config.body_px);
    let author_scale = PxScale::from(config.author_px);

    let x = config.margin as i32;
    let mut y = config.margin as i32;
    for line in wrapped_body.lines() {
        draw_text_mut(img, TEXT_COLOR, x, y, body_scale, &font, line);
        y += config.line_advance() as i32;
    }

    let author_line = format!("- {author}");
    let author_y =
        img.height() as i32 - config.margin as i32 - config.author_px.ceil() as i32;
    draw_text_mut(
        img,
        TEXT_COLOR,
        x,
        author_y.max(0),
        author_scale,
        &font,
        &author_line,
    );

    Ok(())
}
