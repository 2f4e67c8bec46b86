//! Monochrome/structural glyph matching (spec.md §4.2, §6 interface #4,
//! §9 open question).
//!
//! The source this spec was distilled from carries two distinct
//! similarity-scoring pipelines: a simple Hamming-distance-like score,
//! and a richer "structural" score that rewards symmetry, circularity
//! and a handful of semantic bonuses. Both are dead code with respect
//! to the colored cell optimizer, which only ever minimizes rendered
//! pixel error (`crate::optimizer`). This module keeps both alive for
//! `find_closest_glyph`'s monochrome/preview use case, exactly as the
//! open question resolves: retain both paths, never let the colored
//! optimizer call either.

use img2art_data::{Glyph, GlyphBitmap};

/// Bits that agree between `a` and `b` minus bits that disagree —
/// maximized by the best Hamming-style match. Bounded to `[-64, 64]`.
pub fn hamming_score(a: GlyphBitmap, b: GlyphBitmap) -> i32 {
    let agree = (!(a.0 ^ b.0)).count_ones() as i32; // bits equal across both
    let disagree = (a.0 ^ b.0).count_ones() as i32;
    agree - disagree
}

/// A multi-factor structural score: popcount closeness, row-profile
/// closeness, symmetry (horizontal + vertical), and a mild "circularity"
/// bonus for glyphs whose ink is concentrated away from the corners —
/// meant to prefer round/blocky glyphs over sparse, scattered ones when
/// two candidates tie on simpler measures.
pub fn structural_score(cell: GlyphBitmap, candidate: GlyphBitmap) -> f64 {
    let popcount_term = -(cell.popcount() as f64 - candidate.popcount() as f64).abs();

    let row_term: f64 = cell
        .row_weights()
        .iter()
        .zip(candidate.row_weights().iter())
        .map(|(&a, &b)| -(a as f64 - b as f64).abs())
        .sum();

    let symmetry_term = symmetry_bonus(candidate);
    let circularity_term = circularity_bonus(candidate);
    let hamming_term = f64::from(hamming_score(cell, candidate));

    hamming_term * 2.0 + popcount_term + row_term + symmetry_term + circularity_term
}

fn symmetry_bonus(bmp: GlyphBitmap) -> f64 {
    let mut h_matches = 0u32;
    let mut v_matches = 0u32;
    for y in 0u8..8 {
        for x in 0u8..8 {
            if bmp.get(x, y) == bmp.get(7 - x, y) {
                h_matches += 1;
            }
            if bmp.get(x, y) == bmp.get(x, 7 - y) {
                v_matches += 1;
            }
        }
    }
    f64::from(h_matches + v_matches) * 0.05
}

fn circularity_bonus(bmp: GlyphBitmap) -> f64 {
    // Reward ink near the cell's center, penalize ink in the four
    // corner 2x2 blocks.
    let mut bonus = 0.0;
    for y in 0u8..8 {
        for x in 0u8..8 {
            if !bmp.get(x, y) {
                continue;
            }
            let is_corner = (x < 2 || x > 5) && (y < 2 || y > 5);
            let is_center = (2..=5).contains(&x) && (2..=5).contains(&y);
            if is_corner {
                bonus -= 0.1;
            } else if is_center {
                bonus += 0.1;
            }
        }
    }
    bonus
}

/// Picks the candidate maximizing the structural score. First occurrence
/// wins ties, matching the spec's general tie-breaking rule. (`Iterator::max_by`
/// keeps the *last* maximum on ties, so the comparison is folded by hand.)
pub fn best_match<'a>(cell_bitmap: GlyphBitmap, candidates: &[&'a Glyph]) -> Option<&'a Glyph> {
    let mut best: Option<(&'a Glyph, f64)> = None;
    for &candidate in candidates {
        let score = structural_score(cell_bitmap, candidate.bitmap);
        if best.map(|(_, best_score)| score > best_score).unwrap_or(true) {
            best = Some((candidate, score));
        }
    }
    best.map(|(glyph, _)| glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bitmaps_score_higher_than_inverted() {
        let a = GlyphBitmap::from_bits(0xAAAA_AAAA_AAAA_AAAA);
        let b = GlyphBitmap::from_bits(!0xAAAA_AAAA_AAAA_AAAAu64);
        assert!(hamming_score(a, a) > hamming_score(a, b));
        assert!(structural_score(a, a) > structural_score(a, b));
    }

    #[test]
    fn symmetric_glyph_scores_higher_on_structural_metric() {
        let mut symmetric = GlyphBitmap::EMPTY;
        for x in 0u8..8 {
            symmetric.set(x, 0);
            symmetric.set(x, 7);
        }

        let mut lopsided = GlyphBitmap::EMPTY;
        for x in 0u8..4 {
            lopsided.set(x, 0);
        }
        for x in 4u8..8 {
            lopsided.set(x, 7);
        }

        // same popcount (16), but `symmetric` should win on the symmetry
        // term when matched against itself as the query.
        assert_eq!(symmetric.popcount(), lopsided.popcount());
        assert!(structural_score(symmetric, symmetric) > structural_score(symmetric, lopsided));
    }

    #[test]
    fn best_match_picks_first_on_exact_tie() {
        let bmp = GlyphBitmap::from_bits(0xFF);
        let a = Glyph::from_bitmap('a', bmp);
        let b = Glyph::from_bitmap('b', bmp);
        let refs = vec![&a, &b];
        let best = best_match(bmp, &refs).unwrap();
        assert_eq!(best.codepoint, 'a');
    }
}
