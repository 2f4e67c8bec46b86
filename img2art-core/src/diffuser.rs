//! Floyd-Steinberg error diffusion (spec.md §4.5).
//!
//! Diffusion compares the *committed* cell rendering against the
//! *source* cell it approximated, and pushes the difference into the
//! working image's not-yet-visited neighbors. It never touches
//! already-committed `BlockRune`s — only the working copy future cells
//! read from.

use img2art_data::{BlockRune, Cell, Rgb, WorkingImage};

/// Normative Floyd-Steinberg weights: (dx, dy, weight/16) (spec.md §4.5).
const WEIGHTS: [(i64, i64, f64); 4] = [(1, 0, 7.0 / 16.0), (-1, 1, 3.0 / 16.0), (0, 1, 5.0 / 16.0), (1, 1, 1.0 / 16.0)];

/// Diffuses the error between `cell` (the source pixels as they stood
/// *before* this cell was committed) and the committed rune's rendered
/// colors into `working`'s neighboring pixels, one source pixel at a
/// time. The source color for each pixel always comes from `cell`, never
/// from `working`, so that diffusion already pushed earlier in this same
/// call can never feed back into a later pixel's own error — the result
/// is independent of traversal order within the cell (spec.md §6).
/// `working` is mutated in place; out-of-bounds targets are silently
/// dropped by `WorkingImage::accumulate`.
pub fn diffuse_cell(
    working: &mut WorkingImage,
    cx: u32,
    cy: u32,
    cell: &Cell,
    rune: &BlockRune,
    glyph_bitmap: img2art_data::GlyphBitmap,
) {
    for y in 0u8..8 {
        for x in 0u8..8 {
            let px = cx as i64 * 8 + x as i64;
            let py = cy as i64 * 8 + y as i64;

            let rendered = if glyph_bitmap.get(x, y) { rune.fg } else { rune.bg };
            let source = cell.get(x, y);

            let err = (
                f64::from(source.r) - f64::from(rendered.r),
                f64::from(source.g) - f64::from(rendered.g),
                f64::from(source.b) - f64::from(rendered.b),
            );

            for &(dx, dy, weight) in &WEIGHTS {
                working.accumulate(px + dx, py + dy, (err.0 * weight, err.1 * weight, err.2 * weight));
            }
        }
    }
}
