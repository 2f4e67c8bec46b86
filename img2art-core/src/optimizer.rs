//! The cell optimizer (spec.md §4.4): the engine's innermost loop.
//! Enumerates every (glyph, color-pair) combination a cell could be
//! rendered as and keeps the one with the lowest summed pixel error.

use img2art_charset::CharSet;
use img2art_data::{BlockRune, Cell, ColorPair, Palette, Rgb};

use crate::color::ColorSelector;
use crate::glyph_index::GlyphIndex;

/// Summed Euclidean RGB error between a cell and a candidate
/// (glyph, color-pair) rendering — the quantity every other candidate
/// is compared against (spec.md §4.4).
fn pixel_error(cell: &Cell, glyph_bitmap: img2art_data::GlyphBitmap, pair: ColorPair) -> f64 {
    let mut total = 0.0;
    for y in 0u8..8 {
        for x in 0u8..8 {
            let rendered = if glyph_bitmap.get(x, y) { pair.fg } else { pair.bg };
            total += cell.get(x, y).distance(rendered);
        }
    }
    total
}

/// Picks the best `(char, ColorPair)` rendering for one cell, trying
/// every glyph the restricted character set admits against every
/// candidate color pair, in that nested order. Ties are broken by first
/// occurrence in this iteration order — charset order outermost, color
/// pair order innermost (spec.md §4.4, §9).
pub fn optimize_cell(
    cell: &Cell,
    charset: &CharSet,
    glyph_index: &GlyphIndex,
    palette: &Palette,
    color_selector: &ColorSelector,
) -> BlockRune {
    // PaletteEmpty (spec.md §7): bypass glyph/color search entirely —
    // every such cell renders as a space filled with its own average.
    if palette.is_empty() {
        let avg = cell.average();
        return BlockRune::new(' ', avg, avg);
    }

    // Empty character set (spec.md §4.4 edge case): nothing to render
    // with, fall back to the blank rune.
    if charset.is_empty() {
        return BlockRune::blank();
    }

    let mut color_pairs = color_selector.select(cell, palette);
    if color_pairs.is_empty() {
        // Edge case: the selector produced nothing usable (e.g. a
        // contrast threshold no pair clears and no fallback fired).
        // Fall back to a locally computed dominant pair.
        color_pairs = ColorSelector::Dominant.select(cell, palette);
    }
    if color_pairs.is_empty() {
        let avg = cell.average();
        return BlockRune::new(' ', avg, avg);
    }

    let mut best: Option<(char, ColorPair, f64)> = None;

    for codepoint in charset.iter() {
        let Some(glyph) = glyph_index.lookup(codepoint) else {
            continue;
        };
        for &pair in &color_pairs {
            let error = pixel_error(cell, glyph.bitmap, pair);
            let better = match best {
                Some((_, _, best_error)) => error < best_error,
                None => true,
            };
            if better {
                best = Some((codepoint, pair, error));
            }
        }
    }

    match best {
        Some((rune, pair, _)) => BlockRune::new(rune, pair.fg, pair.bg),
        // Charset non-empty but none of its codepoints are in the font.
        None => {
            let avg = cell.average();
            BlockRune::new(' ', avg, avg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use img2art_data::{Glyph, GlyphBitmap};

    fn glyph_at(c: char, bits: &[(u8, u8)]) -> Glyph {
        let mut bmp = GlyphBitmap::EMPTY;
        for &(x, y) in bits {
            bmp.set(x, y);
        }
        Glyph::from_bitmap(c, bmp)
    }

    #[test]
    fn solid_black_cell_prefers_space_over_noisier_glyphs() {
        let cell = Cell::new([Rgb::BLACK; 64]);
        let charset = CharSet::custom(vec![' ', '#']);
        let full = {
            let mut bmp = GlyphBitmap::EMPTY;
            for y in 0..8u8 {
                for x in 0..8u8 {
                    bmp.set(x, y);
                }
            }
            bmp
        };
        let index = GlyphIndex::new(vec![glyph_at(' ', &[]), Glyph::from_bitmap('#', full)]);
        let palette = Palette::new(vec![Rgb::BLACK, Rgb::WHITE]);
        let rune = optimize_cell(&cell, &charset, &index, &palette, &ColorSelector::Dominant);
        assert_eq!(rune.fg, Rgb::BLACK);
        assert_eq!(rune.bg, Rgb::BLACK);
    }

    #[test]
    fn empty_palette_yields_average_filled_space() {
        let cell = Cell::new([Rgb::new(40, 50, 60); 64]);
        let charset = CharSet::density();
        let index = GlyphIndex::new(vec![glyph_at(' ', &[])]);
        let palette = Palette::new(vec![]);
        let rune = optimize_cell(&cell, &charset, &index, &palette, &ColorSelector::Dominant);
        assert_eq!(rune.rune, ' ');
        assert_eq!(rune.fg, Rgb::new(40, 50, 60));
        assert_eq!(rune.bg, Rgb::new(40, 50, 60));
    }

    #[test]
    fn empty_charset_yields_blank_rune() {
        let cell = Cell::new([Rgb::WHITE; 64]);
        let charset = CharSet::custom(vec![]);
        let index = GlyphIndex::new(vec![glyph_at(' ', &[])]);
        let palette = Palette::ansi16();
        let rune = optimize_cell(&cell, &charset, &index, &palette, &ColorSelector::Dominant);
        assert_eq!(rune, BlockRune::blank());
    }

    #[test]
    fn ties_break_by_first_occurrence_in_charset_order() {
        // Two glyphs with identical bitmaps score identically against any
        // color pair; the one listed first in the charset must win.
        let cell = Cell::new([Rgb::BLACK; 64]);
        let charset = CharSet::custom(vec!['a', 'b']);
        let index = GlyphIndex::new(vec![glyph_at('a', &[(0, 0)]), glyph_at('b', &[(0, 0)])]);
        let palette = Palette::new(vec![Rgb::BLACK, Rgb::WHITE]);
        let rune = optimize_cell(&cell, &charset, &index, &palette, &ColorSelector::Dominant);
        assert_eq!(rune.rune, 'a');
    }
}
