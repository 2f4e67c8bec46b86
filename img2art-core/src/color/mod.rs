//! Color selectors (spec.md §4.3, §9 design note).
//!
//! Modeled as a sum type dispatched by `match` rather than a trait
//! object: the cell optimizer calls `select` once per cell in the
//! hottest loop in the engine, and a `match` over a closed set of
//! variants compiles to a jump table with no vtable indirection.

mod contrast;
mod dominant;
mod exhaustive;
mod frequency;
mod kmeans;
mod util;

use img2art_data::{Cell, ColorPair, Palette, Rgb};

/// The eight color-selection strategies (spec.md §4.3). `KMeans`,
/// `Optimized` and `Quantized` all cluster via k-means but differ in how
/// cluster centers become candidate pairs: `KMeans` emits only pairs of
/// *distinct* snapped centers, `Quantized` emits every ordered pair over
/// the deduped snapped centers (same-color pairs included), and
/// `Optimized` widens each center to its `k` nearest palette entries
/// before pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSelector {
    Dominant,
    KMeans { k: usize },
    Optimized { k: usize },
    Frequency { top_n: usize },
    Contrast { min_contrast: f64 },
    Quantized { levels: usize },
    ExhaustiveBounded { max_pairs: usize },
    ExhaustiveTrue,
}

impl ColorSelector {
    /// Proposes candidate `(fg, bg)` pairs for one cell. An empty
    /// palette always yields an empty list regardless of strategy
    /// (spec.md §7, PaletteEmpty) — the driver supplies the cell-average
    /// fallback pair in that case, not the selector.
    pub fn select(&self, cell: &Cell, palette: &Palette) -> Vec<ColorPair> {
        if palette.is_empty() {
            return Vec::new();
        }

        match *self {
            ColorSelector::Dominant => dominant::select(cell, palette),
            ColorSelector::KMeans { k } => select_kmeans(cell, palette, k),
            ColorSelector::Optimized { k } => select_optimized(cell, palette, k),
            ColorSelector::Frequency { top_n } => frequency::select(cell, palette, top_n),
            ColorSelector::Contrast { min_contrast } => {
                contrast::select(cell, palette, min_contrast)
            }
            ColorSelector::Quantized { levels } => select_quantized(cell, palette, levels),
            ColorSelector::ExhaustiveBounded { max_pairs } => {
                exhaustive::select_bounded(palette, max_pairs)
            }
            ColorSelector::ExhaustiveTrue => exhaustive::select_true(palette),
        }
    }
}

/// KMeans: cluster the cell into `k` centers, snap each to its nearest
/// palette entry, dedupe, and emit every ordered pair of *distinct*
/// snapped centers (spec.md §4.3 — KMeans is explicit about
/// distinctness, unlike Optimized/Quantized).
fn select_kmeans(cell: &Cell, palette: &Palette, k: usize) -> Vec<ColorPair> {
    let centers = kmeans::kmeans_centers(cell, k);
    let snapped = util::dedup_sorted(centers.into_iter().filter_map(|c| palette.nearest(c)).collect());

    let mut pairs = Vec::new();
    for &a in &snapped {
        for &b in &snapped {
            if a != b {
                pairs.push(ColorPair::new(a, b));
            }
        }
    }
    pairs
}

/// Quantized: cluster into `levels` centers, snap each to its nearest
/// palette entry, dedupe, and emit every ordered pair over the deduped
/// set — including same-color pairs when quantization collapses to a
/// single level (spec.md §4.3 has no distinctness requirement here,
/// unlike KMeans).
fn select_quantized(cell: &Cell, palette: &Palette, levels: usize) -> Vec<ColorPair> {
    let centers = kmeans::kmeans_centers(cell, levels);
    let snapped = util::dedup_sorted(centers.into_iter().filter_map(|c| palette.nearest(c)).collect());
    util::all_ordered_pairs(&snapped)
}

/// Optimized: cluster into `k` centers, then for each center gather the
/// `k` nearest palette entries (not just the single nearest), union
/// across centers, and emit every ordered pair over the union —
/// trading a larger candidate set for a better chance the optimizer
/// finds a low-error pair (spec.md §4.3).
fn select_optimized(cell: &Cell, palette: &Palette, k: usize) -> Vec<ColorPair> {
    let centers = kmeans::kmeans_centers(cell, k);
    let take = k.max(1);

    let mut candidates: Vec<Rgb> = Vec::new();
    for center in centers {
        let mut ranked: Vec<Rgb> = palette.colors().to_vec();
        ranked.sort_by_key(|c| c.distance_squared(center));
        for c in ranked.into_iter().take(take) {
            if !candidates.contains(&c) {
                candidates.push(c);
            }
        }
    }

    util::all_ordered_pairs(&candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_always_yields_no_pairs() {
        let cell = Cell::new([Rgb::WHITE; 64]);
        let empty = Palette::new(vec![]);
        let selectors = [
            ColorSelector::Dominant,
            ColorSelector::KMeans { k: 2 },
            ColorSelector::Optimized { k: 2 },
            ColorSelector::Frequency { top_n: 2 },
            ColorSelector::Contrast { min_contrast: 10.0 },
            ColorSelector::Quantized { levels: 2 },
            ColorSelector::ExhaustiveBounded { max_pairs: 10 },
            ColorSelector::ExhaustiveTrue,
        ];
        for selector in selectors {
            assert!(selector.select(&cell, &empty).is_empty(), "{selector:?}");
        }
    }

    #[test]
    fn kmeans_pairs_are_all_distinct_fg_bg() {
        let mut pixels = [Rgb::BLACK; 64];
        for p in pixels.iter_mut().take(32) {
            *p = Rgb::WHITE;
        }
        let cell = Cell::new(pixels);
        let palette = Palette::ansi16();
        let pairs = ColorSelector::KMeans { k: 2 }.select(&cell, &palette);
        assert!(pairs.iter().all(|p| p.fg != p.bg));
    }

    #[test]
    fn optimized_candidate_set_can_include_same_color_pairs() {
        let cell = Cell::new([Rgb::new(1, 1, 1); 64]);
        let palette = Palette::ansi16();
        let pairs = ColorSelector::Optimized { k: 1 }.select(&cell, &palette);
        assert!(pairs.iter().any(|p| p.fg == p.bg));
    }

    #[test]
    fn quantized_collapsing_to_one_color_still_yields_a_same_color_pair() {
        // A uniform cell quantizes to a single center regardless of
        // `levels`; Quantized (unlike KMeans) must still emit (c, c)
        // rather than dropping to an empty candidate list.
        let cell = Cell::new([Rgb::new(1, 1, 1); 64]);
        let palette = Palette::ansi16();
        let pairs = ColorSelector::Quantized { levels: 4 }.select(&cell, &palette);
        assert!(!pairs.is_empty());
        assert!(pairs.iter().any(|p| p.fg == p.bg));
    }
}
