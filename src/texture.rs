//! Atlas texture compositing
//!
//! Blits every placed glyph bitmap into one RGBA image: rendered glyphs
//! as white with coverage alpha (the renderer tints at draw time), icons
//! as their own RGBA pixels, placeholders left transparent.

use anyhow::{Context, Result};
use image::RgbaImage;
use log::debug;
use std::path::Path;

use crate::font::glyph::{Glyph, GlyphSource};

/// Composite all glyphs at their packed positions.
///
/// Placements are guaranteed in-bounds by the packer; out-of-range source
/// indices are skipped rather than trusted.
pub fn compose<'a>(tex_w: u32, tex_h: u32, glyphs: impl Iterator<Item = &'a Glyph>) -> RgbaImage {
    let mut img = RgbaImage::new(tex_w, tex_h);
    let mut blitted = 0usize;

    for glyph in glyphs {
        if glyph.empty {
            continue;
        }
        match &glyph.source {
            GlyphSource::Rendered(coverage) => {
                for y in 0..glyph.height {
                    for x in 0..glyph.width {
                        let src = (y * glyph.width + x) as usize;
                        let Some(&alpha) = coverage.get(src) else {
                            continue;
                        };
                        img.put_pixel(glyph.x + x, glyph.y + y, image::Rgba([255, 255, 255, alpha]));
                    }
                }
            }
            GlyphSource::FixedBitmap(rgba) => {
                for y in 0..glyph.height {
                    for x in 0..glyph.width {
                        let src = ((y * glyph.width + x) * 4) as usize;
                        let Some(px) = rgba.get(src..src + 4) else {
                            continue;
                        };
                        img.put_pixel(
                            glyph.x + x,
                            glyph.y + y,
                            image::Rgba([px[0], px[1], px[2], px[3]]),
                        );
                    }
                }
            }
        }
        blitted += 1;
    }

    debug!("Composited {} glyph bitmaps into {}x{} atlas", blitted, tex_w, tex_h);
    img
}

/// Encode the atlas as PNG.
pub fn save(path: &Path, img: &RgbaImage) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write texture: {}", path.display()))
}
