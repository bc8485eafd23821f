//! Rectangle packing
//!
//! Places glyph rectangles into a single fixed-size texture bin using
//! shelf packing: rectangles are laid out left to right along a row, and
//! the row advances by the tallest rectangle seen so far when the next
//! one no longer fits horizontally.
//!
//! Guarantees, independent of heuristic:
//! - input order is preserved (no sorting, so identical input gives
//!   identical placements),
//! - rotation is never applied,
//! - no two rectangles overlap,
//! - every rectangle lies fully inside the bin,
//! - overflow is a hard error, never a silent skip.
//!
//! Rectangles are packed tight (no inter-glyph padding); the consuming
//! renderer samples exact texel rects, not filtered UVs.

use thiserror::Error;

/// Width/height of one rectangle to place, in pixels.
pub type RectSize = (u32, u32);

/// Top-left placement assigned to one rectangle, in pixels.
pub type Placement = (u32, u32);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// A single rectangle is wider or taller than the bin itself
    #[error("rect #{index} ({width}x{height}) exceeds bin {bin_w}x{bin_h}")]
    RectTooLarge {
        index: usize,
        width: u32,
        height: u32,
        bin_w: u32,
        bin_h: u32,
    },

    /// The shelf layout ran past the bottom of the bin
    #[error("bin {bin_w}x{bin_h} overflows at rect #{index} ({placed} of {total} placed)")]
    BinFull {
        index: usize,
        placed: usize,
        total: usize,
        bin_w: u32,
        bin_h: u32,
    },
}

/// Pack `sizes` into a `bin_w` x `bin_h` bin.
///
/// Returns one top-left placement per input rectangle, in input order.
pub fn pack(sizes: &[RectSize], bin_w: u32, bin_h: u32) -> Result<Vec<Placement>, PackError> {
    let mut placements = Vec::with_capacity(sizes.len());

    let mut cursor_x = 0u32;
    let mut cursor_y = 0u32;
    let mut row_height = 0u32;

    for (index, &(w, h)) in sizes.iter().enumerate() {
        if w > bin_w || h > bin_h {
            return Err(PackError::RectTooLarge {
                index,
                width: w,
                height: h,
                bin_w,
                bin_h,
            });
        }

        // Move to the next row if the rect doesn't fit in the current one
        if cursor_x + w > bin_w {
            cursor_y += row_height;
            cursor_x = 0;
            row_height = 0;
        }

        if cursor_y + h > bin_h {
            return Err(PackError::BinFull {
                index,
                placed: placements.len(),
                total: sizes.len(),
                bin_w,
                bin_h,
            });
        }

        placements.push((cursor_x, cursor_y));
        cursor_x += w;
        row_height = row_height.max(h);
    }

    Ok(placements)
}
