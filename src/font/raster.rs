//! Glyph rasterization boundary
//!
//! Everything that turns a character into pixels lives behind the
//! `GlyphRasterizer` trait: the production implementation wraps fontdue,
//! tests substitute fixed bitmaps. Controller-button icons come from PNG
//! assets instead of the font and are served by `IconLibrary`.

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::glyph::icon_name;

/// One rasterized glyph: coverage bitmap plus the metrics the table
/// encoder needs.
///
/// A zero-size bitmap (spaces, control characters, missing glyphs) is the
/// "no bitmap" signal; advance and bearings are still meaningful then.
#[derive(Debug, Clone)]
pub struct RasterGlyph {
    /// Bitmap width in pixels
    pub width: u32,
    /// Bitmap height in pixels
    pub height: u32,
    /// Horizontal bearing (bitmap left edge relative to pen)
    pub xoffset: i32,
    /// Distance from the baseline up to the bitmap top edge
    pub top: i32,
    /// Horizontal advance to the next character
    pub advance: f32,
    /// Row-major alpha coverage, `width * height` bytes
    pub coverage: Vec<u8>,
}

/// Renders single characters at a fixed face and size.
pub trait GlyphRasterizer {
    fn rasterize(&self, ch: char) -> RasterGlyph;
}

/// A loaded font face at one point size.
pub struct FontFace {
    font: Font,
    size: f32,
}

impl FontFace {
    /// Load a TTF/OTF file.
    pub fn load(path: &Path, size: u32) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("failed to read font file: {}", path.display()))?;
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| anyhow!("failed to load font {}: {}", path.display(), e))?;
        info!("Font loaded: {} at {}px", path.display(), size);
        Ok(Self {
            font,
            size: size as f32,
        })
    }
}

impl GlyphRasterizer for FontFace {
    fn rasterize(&self, ch: char) -> RasterGlyph {
        let (metrics, coverage) = self.font.rasterize(ch, self.size);
        RasterGlyph {
            width: metrics.width as u32,
            height: metrics.height as u32,
            xoffset: metrics.xmin,
            top: metrics.height as i32 + metrics.ymin,
            advance: metrics.advance_width,
            coverage,
        }
    }
}

/// RGBA bitmap for one controller-button icon.
#[derive(Debug, Clone)]
pub struct IconBitmap {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

/// Loads and caches icon bitmaps from the icon asset directory.
pub struct IconLibrary {
    dir: PathBuf,
    cache: HashMap<char, IconBitmap>,
}

impl IconLibrary {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            cache: HashMap::new(),
        }
    }

    /// Icon bitmap for `ch`, or `None` if `ch` has no icon mapping.
    ///
    /// A mapped character whose asset file is missing or unreadable is a
    /// configuration error.
    pub fn get(&mut self, ch: char) -> Result<Option<IconBitmap>> {
        let Some(name) = icon_name(ch) else {
            return Ok(None);
        };
        if let Some(bitmap) = self.cache.get(&ch) {
            return Ok(Some(bitmap.clone()));
        }

        let path = self.dir.join(format!("{}.png", name));
        let img = image::open(&path)
            .with_context(|| format!("failed to load icon bitmap: {}", path.display()))?
            .to_rgba8();
        debug!(
            "Icon loaded: {} ({}x{}) for U+{:04X}",
            path.display(),
            img.width(),
            img.height(),
            ch as u32
        );

        let bitmap = IconBitmap {
            width: img.width(),
            height: img.height(),
            rgba: img.into_raw(),
        };
        self.cache.insert(ch, bitmap.clone());
        Ok(Some(bitmap))
    }
}

/// Test rasterizer: every character becomes a solid `size` x `size` box
/// sitting on the baseline, except characters listed as zero-size (which
/// keep their advance, like a real space).
#[cfg(test)]
pub(crate) struct StubRasterizer {
    pub size: u32,
    pub zero_size: Vec<char>,
}

#[cfg(test)]
impl GlyphRasterizer for StubRasterizer {
    fn rasterize(&self, ch: char) -> RasterGlyph {
        let (w, h, coverage) = if self.zero_size.contains(&ch) {
            (0, 0, Vec::new())
        } else {
            (self.size, self.size, vec![255; (self.size * self.size) as usize])
        };
        RasterGlyph {
            width: w,
            height: h,
            xoffset: 0,
            top: h as i32,
            advance: self.size as f32 + 1.0,
            coverage,
        }
    }
}
