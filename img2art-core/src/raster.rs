//! Glyph raster & feature extraction (spec.md §4.1).
//!
//! This module never talks to a real font. It consumes an 8x8 alpha
//! raster handed to it by an external collaborator (a TrueType
//! rasterizer, a test fixture, ...) and turns it into the compact
//! bitmap + derived features the rest of the core operates on.

use img2art_data::{Glyph, GlyphBitmap};
use tracing::{debug, trace};

/// 25% of full opacity. Normative: no other threshold is permitted in
/// the core (spec.md §4.1, §6).
const ALPHA_THRESHOLD: u8 = 64;

/// Thresholds an 8x8 alpha raster (`0..=255` per pixel, row-major) into
/// a `GlyphBitmap`. The only place the alpha threshold is applied.
pub fn threshold_alpha(alpha: &[[u8; 8]; 8]) -> GlyphBitmap {
    let mut bmp = GlyphBitmap::EMPTY;
    for (y, row) in alpha.iter().enumerate() {
        for (x, &a) in row.iter().enumerate() {
            if a > ALPHA_THRESHOLD {
                bmp.set(x as u8, y as u8);
            }
        }
    }
    bmp
}

/// Builds a single glyph from a thresholded raster, or `None` if the
/// glyph should be skipped (empty and not the space character).
pub fn rasterize_glyph(codepoint: char, alpha: &[[u8; 8]; 8]) -> Option<Glyph> {
    let bitmap = threshold_alpha(alpha);

    if bitmap.is_empty() && codepoint != ' ' {
        trace!(codepoint = %codepoint, "skipping empty glyph");
        return None;
    }

    Some(Glyph::from_bitmap(codepoint, bitmap))
}

fn is_non_printable(c: char) -> bool {
    c.is_control()
}

/// Builds the full glyph set (spec.md §4.1, external interface #1).
///
/// `rasterize_fn` returns `None` to signal "the font has no glyph for
/// this codepoint" — the only failure mode exposed; it is treated as
/// "skip", never propagated as an error. `codepoint_filter` is an
/// additional inclusion predicate (e.g. "printable and present in both
/// primary and fallback fonts") applied before rasterization is even
/// attempted.
pub fn build_glyphs(
    codepoints: impl IntoIterator<Item = char>,
    mut rasterize_fn: impl FnMut(char) -> Option<[[u8; 8]; 8]>,
    mut codepoint_filter: impl FnMut(char) -> bool,
) -> Vec<Glyph> {
    let mut glyphs = Vec::new();

    for codepoint in codepoints {
        if is_non_printable(codepoint) || !codepoint_filter(codepoint) {
            continue;
        }

        let Some(alpha) = rasterize_fn(codepoint) else {
            trace!(codepoint = %codepoint, "font reports no glyph");
            continue;
        };

        if let Some(glyph) = rasterize_glyph(codepoint, &alpha) {
            glyphs.push(glyph);
        }
    }

    debug!(glyph_count = glyphs.len(), "rasterized glyph set");
    glyphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_from_bits(set: &[(usize, usize)]) -> [[u8; 8]; 8] {
        let mut alpha = [[0u8; 8]; 8];
        for &(x, y) in set {
            alpha[y][x] = 255;
        }
        alpha
    }

    #[test]
    fn threshold_is_25_percent() {
        let mut alpha = [[0u8; 8]; 8];
        alpha[0][0] = 64; // exactly at threshold: must NOT be set
        alpha[0][1] = 65; // just above: must be set
        let bmp = threshold_alpha(&alpha);
        assert!(!bmp.get(0, 0));
        assert!(bmp.get(1, 0));
    }

    #[test]
    fn empty_non_space_glyph_is_skipped() {
        let alpha = [[0u8; 8]; 8];
        assert!(rasterize_glyph('x', &alpha).is_none());
    }

    #[test]
    fn empty_space_glyph_is_retained() {
        let alpha = [[0u8; 8]; 8];
        let glyph = rasterize_glyph(' ', &alpha).expect("space retained");
        assert_eq!(glyph.popcount, 0);
    }

    #[test]
    fn build_glyphs_skips_filtered_and_missing() {
        let codepoints = ['a', 'b', 'c'];
        let glyphs = build_glyphs(
            codepoints,
            |c| if c == 'b' { None } else { Some(alpha_from_bits(&[(0, 0)])) },
            |c| c != 'c',
        );
        let rendered: Vec<char> = glyphs.iter().map(|g| g.codepoint).collect();
        assert_eq!(rendered, vec!['a']);
    }

    #[test]
    fn rasterizing_twice_is_deterministic() {
        let alpha = alpha_from_bits(&[(1, 1), (2, 3), (7, 7)]);
        let a = rasterize_glyph('x', &alpha).unwrap();
        let b = rasterize_glyph('x', &alpha).unwrap();
        assert_eq!(a, b);
    }
}
