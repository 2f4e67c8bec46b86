//! The glyph index (spec.md §4.2): a read-only table of rasterized
//! glyphs with two secondary indices that let a search prune candidates
//! in time proportional to the candidates returned, not to the total
//! glyph count.

use std::collections::HashMap;

use img2art_data::{Glyph, GlyphBitmap};

use crate::monochrome;

const ZONE_COUNT: usize = 4;
const MAX_ZONE_WEIGHT: usize = 16;
const MAX_POPCOUNT: usize = 64;

/// A read-only index over a glyph set, built once and shared freely
/// across threads (spec.md §4.2, §5).
#[derive(Debug)]
pub struct GlyphIndex {
    glyphs: Vec<Glyph>,
    by_codepoint: HashMap<char, usize>,
    by_popcount: Vec<Vec<usize>>,
    by_zone_weight: [Vec<Vec<usize>>; ZONE_COUNT],
}

impl GlyphIndex {
    pub fn new(glyphs: Vec<Glyph>) -> Self {
        let mut by_codepoint = HashMap::with_capacity(glyphs.len());
        let mut by_popcount = vec![Vec::new(); MAX_POPCOUNT + 1];
        let mut by_zone_weight: [Vec<Vec<usize>>; ZONE_COUNT] =
            std::array::from_fn(|_| vec![Vec::new(); MAX_ZONE_WEIGHT + 1]);

        for (idx, glyph) in glyphs.iter().enumerate() {
            by_codepoint.insert(glyph.codepoint, idx);
            by_popcount[glyph.popcount as usize].push(idx);
            for zone in 0..ZONE_COUNT {
                by_zone_weight[zone][glyph.zone_weights[zone] as usize].push(idx);
            }
        }

        Self { glyphs, by_codepoint, by_popcount, by_zone_weight }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn lookup(&self, codepoint: char) -> Option<&Glyph> {
        self.by_codepoint.get(&codepoint).map(|&idx| &self.glyphs[idx])
    }

    /// Glyphs whose zone weights all fall within `±3` of `cell_zone_weights`.
    /// Falls back to exact-total-popcount matches if the tolerant search
    /// comes up empty (spec.md §4.2).
    pub fn candidates_by_zone(&self, cell_zone_weights: [u8; ZONE_COUNT]) -> Vec<&Glyph> {
        const ZONE_TOLERANCE: i16 = 3;

        let mut indices = Vec::new();
        let mut seen = vec![false; self.glyphs.len()];

        let lo = (cell_zone_weights[0] as i16 - ZONE_TOLERANCE).max(0) as usize;
        let hi = (cell_zone_weights[0] as i16 + ZONE_TOLERANCE).min(MAX_ZONE_WEIGHT as i16) as usize;

        for weight in lo..=hi {
            for &idx in &self.by_zone_weight[0][weight] {
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;

                let glyph = &self.glyphs[idx];
                let matches_all_zones = (0..ZONE_COUNT).all(|zone| {
                    (glyph.zone_weights[zone] as i16 - cell_zone_weights[zone] as i16).abs()
                        <= ZONE_TOLERANCE
                });

                if matches_all_zones {
                    indices.push(idx);
                }
            }
        }

        if indices.is_empty() {
            let target: u32 = cell_zone_weights.iter().map(|&w| w as u32).sum();
            if (target as usize) <= MAX_POPCOUNT {
                indices.extend(self.by_popcount[target as usize].iter().copied());
            }
        }

        indices.into_iter().map(|idx| &self.glyphs[idx]).collect()
    }

    /// Narrows `candidates` to glyphs whose popcount lies within
    /// `tolerance` of `target`.
    pub fn filter_by_popcount<'a>(
        &self,
        candidates: &[&'a Glyph],
        target: u32,
        tolerance: u32,
    ) -> Vec<&'a Glyph> {
        candidates
            .iter()
            .copied()
            .filter(|g| g.popcount.abs_diff(target) <= tolerance)
            .collect()
    }

    /// Convenience structural-matching lookup for monochrome/preview use
    /// (spec.md §4.2, §6 interface #4). The colored optimizer never
    /// calls this — it only ever minimizes pixel error (spec.md §9 open
    /// question, §4.4).
    pub fn find_closest(&self, cell_bitmap: GlyphBitmap) -> Option<&Glyph> {
        const POPCOUNT_TOLERANCE: u32 = 5;
        const CANDIDATE_FANOUT_LIMIT: usize = 50;

        let glyph = Glyph::from_bitmap('\0', cell_bitmap);

        let mut candidates = self.candidates_by_zone(glyph.zone_weights);
        if candidates.is_empty() {
            return None;
        }

        if candidates.len() > CANDIDATE_FANOUT_LIMIT {
            candidates = self.filter_by_popcount(&candidates, glyph.popcount, POPCOUNT_TOLERANCE);
        }

        monochrome::best_match(cell_bitmap, &candidates)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use img2art_data::Glyph;

    fn glyph(c: char, bits: &[(u8, u8)]) -> Glyph {
        let mut bmp = GlyphBitmap::EMPTY;
        for &(x, y) in bits {
            bmp.set(x, y);
        }
        Glyph::from_bitmap(c, bmp)
    }

    #[test]
    fn lookup_finds_exact_codepoint() {
        let index = GlyphIndex::new(vec![glyph('a', &[(0, 0)]), glyph('b', &[(1, 1)])]);
        assert_eq!(index.lookup('a').unwrap().codepoint, 'a');
        assert!(index.lookup('z').is_none());
    }

    #[test]
    fn candidates_by_zone_matches_within_tolerance() {
        // glyph with 4 pixels all in zone 0 (top-left 4x4)
        let dense = glyph('#', &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let index = GlyphIndex::new(vec![dense.clone()]);

        let hits = index.candidates_by_zone([4, 0, 0, 0]);
        assert_eq!(hits.len(), 1);

        let hits_close = index.candidates_by_zone([6, 0, 0, 0]); // within ±3
        assert_eq!(hits_close.len(), 1);

        let hits_far = index.candidates_by_zone([10, 0, 0, 0]); // outside tolerance, and
                                                                 // popcount fallback (10) doesn't match either
        assert!(hits_far.is_empty());
    }

    #[test]
    fn candidates_by_zone_falls_back_to_popcount() {
        let spread = glyph('+', &[(0, 0), (4, 0), (0, 4), (4, 4)]); // one pixel per zone
        let index = GlyphIndex::new(vec![spread]);

        // zone weights [10, 10, 10, 10] are each far outside tolerance of
        // [1,1,1,1], but the total (40) doesn't match the glyph's total (4)
        // either, so this should be empty.
        assert!(index.candidates_by_zone([10, 10, 10, 10]).is_empty());

        // total popcount sum 4 matches the glyph's actual total popcount
        let fallback = index.candidates_by_zone([1, 1, 1, 1]);
        assert_eq!(fallback.len(), 1);
    }

    #[test]
    fn filter_by_popcount_narrows_candidates() {
        let a = glyph('a', &[(0, 0)]);
        let b = glyph('b', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        let index = GlyphIndex::new(vec![a, b]);
        let all: Vec<&Glyph> = index.iter().collect();
        let narrowed = index.filter_by_popcount(&all, 1, 1);
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].codepoint, 'a');
    }
}
