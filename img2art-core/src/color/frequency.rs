//! Frequency selector (spec.md §4.3): ranks coarse-quantized pixel
//! buckets by occupancy and pairs up the top `top_n` snapped colors.

use std::collections::BTreeMap;

use img2art_data::{Cell, ColorPair, Palette, Rgb};

use super::util::all_ordered_pairs;

pub fn select(cell: &Cell, palette: &Palette, top_n: usize) -> Vec<ColorPair> {
    const DROP_BITS: u32 = 3;

    let mut buckets: BTreeMap<(u8, u8, u8), Vec<Rgb>> = BTreeMap::new();
    for &px in cell.pixels() {
        buckets.entry(px.quantize_bucket(DROP_BITS)).or_default().push(px);
    }

    let mut ranked: Vec<_> = buckets.into_values().collect();
    ranked.sort_by_key(|v| std::cmp::Reverse(v.len()));

    let snapped: Vec<Rgb> = ranked
        .iter()
        .take(top_n.max(1))
        .filter_map(|bucket| palette.nearest(Rgb::average(bucket)))
        .collect();

    let pairs = all_ordered_pairs(&snapped);
    if !pairs.is_empty() {
        return pairs;
    }

    // Fallback: top occupant paired with the global max-contrast partner
    // (spec.md §4.3).
    match (snapped.first(), palette.max_contrast_pair()) {
        (Some(&top), Some((a, b))) => {
            let partner = if a == top { b } else { a };
            vec![ColorPair::new(top, partner)]
        }
        _ => Vec::new(),
    }
}
