//! Font assembly
//!
//! Handles:
//! - global charset accumulation (dedup, codepoint sort)
//! - group registry and glyph expansion
//! - atlas packing and placement write-back
//! - binary table and texture output

pub mod glyph;
pub mod group;
pub mod raster;

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::{encode, pack, texture};

use self::glyph::Glyph;
use self::group::FontGroup;
use self::raster::IconLibrary;

/// Top-level builder: charset + groups in, atlas + tables out.
///
/// Lifecycle: accumulate characters and groups, call `remap` to expand and
/// pack (placements are only valid afterwards), then `save`. Both are
/// deterministic for a fixed input, so a repeated `remap` reproduces
/// identical placements.
pub struct Font {
    tex_w: u32,
    tex_h: u32,
    chars: Vec<char>,
    groups: Vec<FontGroup>,
    icons: IconLibrary,
}

impl Font {
    pub fn new(tex_w: u32, tex_h: u32, icons_dir: PathBuf) -> Self {
        Self {
            tex_w,
            tex_h,
            chars: Vec::new(),
            groups: Vec::new(),
            icons: IconLibrary::new(icons_dir),
        }
    }

    /// Add one character to the global charset. Newlines are layout, not
    /// glyphs; duplicates are dropped.
    pub fn add_char(&mut self, ch: char) {
        if ch == '\n' {
            return;
        }
        if !self.chars.contains(&ch) {
            self.chars.push(ch);
        }
    }

    pub fn add_chars(&mut self, chars: impl IntoIterator<Item = char>) {
        for ch in chars {
            self.add_char(ch);
        }
    }

    pub fn add_group(&mut self, group: FontGroup) {
        self.groups.push(group);
    }

    /// Global charset in final sorted order (valid after `remap`).
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// All glyphs, flattened in group-declaration order.
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> + '_ {
        self.groups.iter().flat_map(|g| g.glyphs.iter())
    }

    /// Expand every group against the sorted charset and pack the result
    /// into the texture bin.
    pub fn remap(&mut self) -> Result<()> {
        self.chars.sort_unstable();

        for group in &mut self.groups {
            group.expand(&self.chars, &mut self.icons)?;
        }

        let sizes: Vec<pack::RectSize> = self
            .groups
            .iter()
            .flat_map(|g| g.glyphs.iter().map(|gl| (gl.width, gl.height)))
            .collect();

        let placements = pack::pack(&sizes, self.tex_w, self.tex_h).map_err(Error::Packing)?;

        for (glyph, (x, y)) in self
            .groups
            .iter_mut()
            .flat_map(|g| g.glyphs.iter_mut())
            .zip(placements)
        {
            glyph.x = x;
            glyph.y = y;
        }

        info!(
            "Remapped {} glyphs ({} chars, {} groups) into {}x{} atlas",
            sizes.len(),
            self.chars.len(),
            self.groups.len(),
            self.tex_w,
            self.tex_h
        );
        Ok(())
    }

    /// Write all outputs: one `<group>.mfnt` per group beside `table_path`,
    /// the global character table, and the composited atlas texture.
    pub fn save(&self, texture_path: &Path, table_path: &Path) -> Result<()> {
        let group_dir = table_path.parent().unwrap_or_else(|| Path::new(""));

        for group in &self.groups {
            let records: Vec<encode::GlyphRecord> =
                group.glyphs.iter().map(|g| g.record()).collect();
            let data =
                encode::encode_group_table(self.tex_w, self.tex_h, group.font_size, &records);
            let path = group_dir.join(format!("{}.mfnt", group.name));
            std::fs::write(&path, &data)
                .with_context(|| format!("failed to write group table: {}", path.display()))?;
            info!(
                "Wrote {} ({} glyphs, {} bytes)",
                path.display(),
                records.len(),
                data.len()
            );
        }

        let table = encode::encode_char_table(&self.chars);
        std::fs::write(table_path, &table)
            .with_context(|| format!("failed to write character table: {}", table_path.display()))?;
        info!(
            "Wrote {} ({} entries)",
            table_path.display(),
            self.chars.len()
        );

        let atlas = texture::compose(self.tex_w, self.tex_h, self.glyphs());
        texture::save(texture_path, &atlas)?;
        info!(
            "Wrote {} ({}x{})",
            texture_path.display(),
            self.tex_w,
            self.tex_h
        );

        Ok(())
    }
}
