//! Binary table encoding
//!
//! Writes the two table formats consumed by the game's text renderer:
//! - `MFNT`: per-group glyph metric table (one file per font group),
//! - `MUCT`: global character-to-index lookup table.
//!
//! Both are little-endian with fixed-width fields. Each file is built in a
//! `Vec<u8>` so derived header fields (`data_size`) can be back-patched
//! from actual byte counts instead of hand-counted sizes.

use log::debug;

/// MFNT header size; also the base the `data_size` field is measured from.
const MFNT_HEADER_SIZE: u32 = 0x28;

/// File offset of the `data_size` header field.
const MFNT_DATA_SIZE_OFFSET: usize = 0x24;

/// Size of one glyph record: seven i16 fields.
const GLYPH_RECORD_SIZE: usize = 0xE;

/// Embedded reference to the shared atlas texture resource.
/// The two trailing NULs are part of the on-disk string.
const TEXTURE_REF: &[u8] = b"system/fonts/textures/japfnt.bctex\x00\x00";

/// Embedded reference to the companion lookup-table resource.
const TABLE_REF: &[u8] = b"system/fonts/symbols/glyphtablejap.buct\x00";

/// One row of a group's glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRecord {
    pub x: i16,
    pub y: i16,
    pub width: i16,
    pub height: i16,
    pub xoffset: i16,
    pub xadv: i16,
}

/// Encode one group's MFNT table.
pub fn encode_group_table(
    tex_w: u32,
    tex_h: u32,
    font_size: u32,
    glyphs: &[GlyphRecord],
) -> Vec<u8> {
    let count = glyphs.len() as u32;
    let table_offset = MFNT_HEADER_SIZE + TEXTURE_REF.len() as u32;

    let mut buf = Vec::with_capacity(
        MFNT_HEADER_SIZE as usize
            + TEXTURE_REF.len()
            + glyphs.len() * GLYPH_RECORD_SIZE
            + 4
            + TABLE_REF.len(),
    );

    buf.extend_from_slice(b"MFNT");
    buf.extend_from_slice(&[1, 0, 9, 0]);
    for field in [
        MFNT_HEADER_SIZE,
        tex_w,
        tex_h,
        2, // format tag
        font_size,
        count,
        table_offset,
        0, // data_size, back-patched below
    ] {
        buf.extend_from_slice(&field.to_le_bytes());
    }
    debug_assert_eq!(buf.len(), MFNT_HEADER_SIZE as usize);

    buf.extend_from_slice(TEXTURE_REF);

    for g in glyphs {
        for field in [g.x, g.y, g.width, g.height, g.xoffset, g.height, g.xadv] {
            buf.extend_from_slice(&field.to_le_bytes());
        }
    }

    // Pad to the next 4-byte boundary before the trailing reference
    buf.resize(buf.len().next_multiple_of(4), 0);
    buf.extend_from_slice(TABLE_REF);

    let data_size = (buf.len() as u32 - MFNT_HEADER_SIZE).to_le_bytes();
    buf[MFNT_DATA_SIZE_OFFSET..MFNT_DATA_SIZE_OFFSET + 4].copy_from_slice(&data_size);

    debug!("Encoded MFNT table: {} glyphs, {} bytes", count, buf.len());
    buf
}

/// Encode the global MUCT character table.
///
/// `chars` must already be in final sorted order; each entry maps the
/// codepoint to its position in that order.
pub fn encode_char_table(chars: &[char]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16 + chars.len() * 8);

    buf.extend_from_slice(b"MUCT");
    buf.extend_from_slice(&[1, 0, 3, 0]);
    buf.extend_from_slice(&(chars.len() as i32).to_le_bytes());
    buf.extend_from_slice(&0x10i32.to_le_bytes());

    for (index, &ch) in chars.iter().enumerate() {
        buf.extend_from_slice(&(ch as i32).to_le_bytes());
        buf.extend_from_slice(&(index as i32).to_le_bytes());
    }

    debug!("Encoded MUCT table: {} entries", chars.len());
    buf
}
