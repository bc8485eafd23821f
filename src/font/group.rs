//! Font groups
//!
//! A group is a named face+size with a character filter. Expansion walks
//! the global sorted charset and produces one glyph slot per character up
//! to the filter's last character; characters outside the filter still
//! occupy a slot (as placeholders) so the renderer can index per-group
//! tables by position.

use anyhow::Result;
use log::debug;

use crate::error::Error;

use super::glyph::Glyph;
use super::raster::{GlyphRasterizer, IconLibrary};

pub struct FontGroup {
    pub name: String,
    /// Point size, echoed into the group's table header
    pub font_size: u32,
    /// Sorted, deduplicated set of characters this group renders normally
    filter: Vec<char>,
    rasterizer: Box<dyn GlyphRasterizer>,
    /// Expansion result, ascending character order
    pub glyphs: Vec<Glyph>,
}

impl FontGroup {
    pub fn new(
        name: impl Into<String>,
        font_size: u32,
        mut filter: Vec<char>,
        rasterizer: Box<dyn GlyphRasterizer>,
    ) -> Result<Self, Error> {
        let name = name.into();
        filter.sort_unstable();
        filter.dedup();
        if filter.is_empty() {
            return Err(Error::config(format!("group '{}' has an empty filter", name)));
        }
        Ok(Self {
            name,
            font_size,
            filter,
            rasterizer,
            glyphs: Vec::new(),
        })
    }

    /// Largest character in the filter; expansion never goes past it.
    pub fn last_char(&self) -> char {
        // Filter is validated non-empty at construction
        *self.filter.last().unwrap_or(&'\0')
    }

    fn in_filter(&self, ch: char) -> bool {
        self.filter.binary_search(&ch).is_ok()
    }

    /// Expand the global sorted charset into this group's glyph list.
    ///
    /// Replaces any previous expansion. `chars` must be sorted ascending;
    /// processing stops at the first character past `last_char`. Icon
    /// characters always produce a real glyph, filter or not; characters
    /// outside the filter keep their slot as a 4x4 placeholder.
    pub fn expand(&mut self, chars: &[char], icons: &mut IconLibrary) -> Result<()> {
        self.glyphs.clear();
        let last = self.last_char();

        for &ch in chars {
            if ch > last {
                break;
            }

            let glyph = if let Some(icon) = icons.get(ch)? {
                Glyph::icon(&self.name, ch, icon)
            } else {
                let mut g = Glyph::rendered(&self.name, ch, self.rasterizer.rasterize(ch));
                if !self.in_filter(ch) {
                    g.mark_empty();
                }
                g
            };
            self.glyphs.push(glyph);
        }

        debug!(
            "Group '{}': {} glyphs expanded (last_char=U+{:04X})",
            self.name,
            self.glyphs.len(),
            last as u32
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::raster::StubRasterizer;
    use std::path::PathBuf;

    fn group(filter: &[char]) -> FontGroup {
        FontGroup::new(
            "Main",
            24,
            filter.to_vec(),
            Box::new(StubRasterizer {
                size: 3,
                zero_size: vec![],
            }),
        )
        .unwrap()
    }

    fn icons() -> IconLibrary {
        IconLibrary::new(PathBuf::from("icons"))
    }

    #[test]
    fn test_filter_truncation() {
        // filter {a, c} against global {a, b, c, d}: a and c render,
        // b is a placeholder, d is never expanded.
        let mut g = group(&['a', 'c']);
        g.expand(&['a', 'b', 'c', 'd'], &mut icons()).unwrap();

        let chars: Vec<char> = g.glyphs.iter().map(|gl| gl.ch).collect();
        assert_eq!(chars, vec!['a', 'b', 'c']);
        assert!(!g.glyphs[0].empty);
        assert!(g.glyphs[1].empty);
        assert!(!g.glyphs[2].empty);
    }

    #[test]
    fn test_placeholder_keeps_slot_geometry() {
        let mut g = group(&['a', 'c']);
        g.expand(&['a', 'b', 'c'], &mut icons()).unwrap();
        assert_eq!((g.glyphs[1].width, g.glyphs[1].height), (4, 4));
    }

    #[test]
    fn test_zero_size_raster_becomes_placeholder() {
        let mut g = FontGroup::new(
            "Main",
            24,
            vec![' ', 'a'],
            Box::new(StubRasterizer {
                size: 3,
                zero_size: vec![' '],
            }),
        )
        .unwrap();
        g.expand(&[' ', 'a'], &mut icons()).unwrap();
        assert!(g.glyphs[0].empty);
        assert!(!g.glyphs[1].empty);
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut g = group(&['a', 'b']);
        g.expand(&['a', 'b'], &mut icons()).unwrap();
        g.expand(&['a', 'b'], &mut icons()).unwrap();
        assert_eq!(g.glyphs.len(), 2);
    }

    #[test]
    fn test_empty_filter_rejected() {
        let result = FontGroup::new(
            "Main",
            24,
            vec![],
            Box::new(StubRasterizer {
                size: 3,
                zero_size: vec![],
            }),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_filter_dedup_and_sort() {
        let g = group(&['c', 'a', 'c', 'b']);
        assert_eq!(g.last_char(), 'c');
        assert!(g.in_filter('a') && g.in_filter('b') && g.in_filter('c'));
    }
}
