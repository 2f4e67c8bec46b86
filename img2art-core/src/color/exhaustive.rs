//! Exhaustive selectors (spec.md §4.3, §9 open question): the
//! brute-force end of the strategy spectrum. `ExhaustiveTrue` pairs
//! every palette entry with every other; `ExhaustiveBounded` samples a
//! deterministic, capped subset when the full cartesian product would be
//! too large.

use img2art_data::{ColorPair, Palette};

use super::util::all_ordered_pairs;

/// Every ordered pair over the full palette: exactly `P^2` pairs for a
/// palette of size `P` (spec.md §8 testable property).
pub fn select_true(palette: &Palette) -> Vec<ColorPair> {
    all_ordered_pairs(palette.colors())
}

/// A deterministic, capped sampler resolving the spec's open question
/// on what "bounded" means in practice: always seeds with the palette's
/// dominant/max-contrast pair first, then walks the palette in index
/// order filling remaining pairs, and never exceeds `max_pairs`
/// (spec.md §9 open question, documented in DESIGN.md).
pub fn select_bounded(palette: &Palette, max_pairs: usize) -> Vec<ColorPair> {
    if max_pairs == 0 || palette.is_empty() {
        return Vec::new();
    }

    let mut pairs = Vec::with_capacity(max_pairs);

    if let Some((a, b)) = palette.max_contrast_pair() {
        pairs.push(ColorPair::new(a, b));
    }

    'outer: for &fg in palette.colors() {
        for &bg in palette.colors() {
            if pairs.len() >= max_pairs {
                break 'outer;
            }
            let candidate = ColorPair::new(fg, bg);
            if !pairs.contains(&candidate) {
                pairs.push(candidate);
            }
        }
    }

    pairs.truncate(max_pairs);
    pairs
}
