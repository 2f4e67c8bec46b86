//! Dominant-color selector (spec.md §4.3): the cheapest strategy, driven
//! entirely by pixel frequency within the cell, with no palette search
//! beyond a single nearest-entry snap.

use std::collections::BTreeMap;

use img2art_data::{Cell, ColorPair, Palette, Rgb};

/// Coarse-quantizes every pixel into a bucket, ranks buckets by
/// occupancy, and returns the (up to) two most frequent buckets'
/// average color. A `BTreeMap` keeps bucket iteration order
/// deterministic so ties are broken by ascending bucket key, never by
/// hash-map iteration order.
fn dominant_colors(cell: &Cell) -> (Rgb, Option<Rgb>) {
    const DROP_BITS: u32 = 3;

    let mut buckets: BTreeMap<(u8, u8, u8), Vec<Rgb>> = BTreeMap::new();
    for &px in cell.pixels() {
        buckets.entry(px.quantize_bucket(DROP_BITS)).or_default().push(px);
    }

    let mut ranked: Vec<_> = buckets.into_values().collect();
    ranked.sort_by_key(|v| std::cmp::Reverse(v.len()));

    let first = Rgb::average(&ranked[0]);
    let second = ranked.get(1).map(|v| Rgb::average(v));
    (first, second)
}

/// Always yields exactly two pairs `{(a,b),(b,a)}`, or one pair `(a,a)`
/// if the cell has a single dominant color (spec.md §4.3).
pub fn select(cell: &Cell, palette: &Palette) -> Vec<ColorPair> {
    let (first, second) = dominant_colors(cell);
    let Some(a) = palette.nearest(first) else {
        return Vec::new();
    };

    match second.and_then(|c| palette.nearest(c)) {
        Some(b) if b != a => vec![ColorPair::new(a, b), ColorPair::new(b, a)],
        _ => vec![ColorPair::new(a, a)],
    }
}
