//! Glyph model
//!
//! A glyph is one character rendered in one group's face/size, or a 4x4
//! transparent placeholder when the character is outside the group's
//! filter or the rasterizer produces no pixels. A small closed set of
//! fullwidth characters maps to controller-button icon bitmaps instead of
//! the font; those pack and encode like any rendered glyph.

use crate::encode::GlyphRecord;

use super::raster::{IconBitmap, RasterGlyph};

/// Side length of the transparent placeholder substituted for filtered-out
/// or metric-less characters.
pub const PLACEHOLDER_SIZE: u32 = 4;

/// Controller-button iconography overrides: fullwidth punctuation reserved
/// by the game's scripts for pad buttons, mapped to icon asset names.
pub const ICONS: &[(char, &str)] = &[
    ('！', "L"),
    ('\u{ff00}', "R"),
    ('＂', "A"),
    ('＃', "B"),
    ('）', "X"),
    ('（', "Y"),
    ('＄', "D_up"),
    ('％', "D_down"),
    ('＇', "D_left"),
    ('＆', "D_right"),
    ('＊', "Aim"),
];

/// Icon asset name for `ch`, if it is one of the reserved icon characters.
pub fn icon_name(ch: char) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(icon_ch, _)| *icon_ch == ch)
        .map(|(_, name)| *name)
}

/// Pixel source for a glyph, resolved once at construction.
#[derive(Debug, Clone)]
pub enum GlyphSource {
    /// Alpha coverage from the rasterizer (blitted as white)
    Rendered(Vec<u8>),
    /// Pre-supplied RGBA bitmap (controller icon)
    FixedBitmap(Vec<u8>),
}

/// One glyph slot in a group's table.
///
/// `x`/`y` are only meaningful after packing has assigned placements.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// Owning group name
    pub group: String,
    pub ch: char,
    /// Packed position in the atlas (top-left)
    pub x: u32,
    pub y: u32,
    /// Bitmap size; also the packed rectangle size
    pub width: u32,
    pub height: u32,
    /// Horizontal bearing
    pub xoffset: i32,
    /// Bitmap height minus the rasterizer's y-origin (descent below the
    /// baseline for rendered glyphs, full height for icons)
    pub yoffset: i32,
    /// Horizontal advance, truncated to whole pixels
    pub xadv: i32,
    /// Placeholder slot (filtered out or zero-size)
    pub empty: bool,
    pub source: GlyphSource,
}

impl Glyph {
    /// Glyph from a rasterized bitmap. A zero-size bitmap becomes an
    /// empty placeholder slot but keeps its pen metrics (a space still
    /// advances the pen).
    pub fn rendered(group: &str, ch: char, raster: RasterGlyph) -> Self {
        let mut glyph = Self {
            group: group.to_string(),
            ch,
            x: 0,
            y: 0,
            width: raster.width,
            height: raster.height,
            xoffset: raster.xoffset,
            yoffset: raster.height as i32 - raster.top,
            xadv: raster.advance as i32,
            empty: false,
            source: GlyphSource::Rendered(raster.coverage),
        };
        if raster.width == 0 || raster.height == 0 {
            glyph.mark_empty();
        }
        glyph
    }

    /// Demote to a 4x4 transparent placeholder. The rectangle and pixel
    /// source are substituted; pen metrics stay as rasterized.
    pub fn mark_empty(&mut self) {
        self.empty = true;
        self.width = PLACEHOLDER_SIZE;
        self.height = PLACEHOLDER_SIZE;
        self.source = GlyphSource::Rendered(Vec::new());
    }

    /// Glyph backed by a controller-icon bitmap. Icons carry no advance
    /// metric of their own: the bitmap width advances the pen and the
    /// bitmap height stands in for the vertical offset.
    pub fn icon(group: &str, ch: char, icon: IconBitmap) -> Self {
        Self {
            group: group.to_string(),
            ch,
            x: 0,
            y: 0,
            width: icon.width,
            height: icon.height,
            xoffset: 0,
            yoffset: icon.height as i32,
            xadv: icon.width as i32,
            empty: false,
            source: GlyphSource::FixedBitmap(icon.rgba),
        }
    }

    /// Row for the group's MFNT table.
    pub fn record(&self) -> GlyphRecord {
        GlyphRecord {
            x: self.x as i16,
            y: self.y as i16,
            width: self.width as i16,
            height: self.height as i16,
            xoffset: self.xoffset as i16,
            xadv: self.xadv as i16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_name() {
        assert_eq!(icon_name('！'), Some("L"));
        assert_eq!(icon_name('＊'), Some("Aim"));
        assert_eq!(icon_name('A'), None);
    }

    #[test]
    fn test_rendered_metrics() {
        let raster = RasterGlyph {
            width: 6,
            height: 10,
            xoffset: 1,
            top: 8,
            advance: 7.9,
            coverage: vec![0; 60],
        };
        let g = Glyph::rendered("Main", 'g', raster);
        assert_eq!(g.yoffset, 2); // descends 2px below the baseline
        assert_eq!(g.xadv, 7); // advance truncates, not rounds
        assert!(!g.empty);
    }

    #[test]
    fn test_zero_size_becomes_placeholder_but_keeps_advance() {
        let raster = RasterGlyph {
            width: 0,
            height: 0,
            xoffset: 0,
            top: 0,
            advance: 6.0,
            coverage: Vec::new(),
        };
        let g = Glyph::rendered("Main", ' ', raster);
        assert!(g.empty);
        assert_eq!((g.width, g.height), (4, 4));
        assert_eq!(g.xadv, 6);
    }

    #[test]
    fn test_mark_empty_substitutes_rect_only() {
        let raster = RasterGlyph {
            width: 6,
            height: 10,
            xoffset: 1,
            top: 8,
            advance: 7.0,
            coverage: vec![0; 60],
        };
        let mut g = Glyph::rendered("Main", 'b', raster);
        g.mark_empty();
        assert!(g.empty);
        assert_eq!((g.width, g.height), (4, 4));
        assert_eq!((g.xoffset, g.xadv), (1, 7));
    }

    #[test]
    fn test_icon_metrics() {
        let icon = IconBitmap {
            width: 12,
            height: 14,
            rgba: vec![0; 12 * 14 * 4],
        };
        let g = Glyph::icon("Main", '！', icon);
        assert_eq!(g.xoffset, 0);
        assert_eq!(g.yoffset, 14);
        assert_eq!(g.xadv, 12);
        assert!(!g.empty);
    }
}
