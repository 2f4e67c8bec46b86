//! Contrast selector (spec.md §4.3): fixes the foreground at the cell's
//! dominant color, then pairs it with every palette entry whose distance
//! from it clears `min_contrast`.

use img2art_data::{Cell, ColorPair, Palette, Rgb};

pub fn select(cell: &Cell, palette: &Palette, min_contrast: f64) -> Vec<ColorPair> {
    let Some(fg) = palette.nearest(cell.average()) else {
        return Vec::new();
    };

    let pairs: Vec<ColorPair> = palette
        .colors()
        .iter()
        .filter(|&&bg| fg.distance(bg) >= min_contrast)
        .map(|&bg| ColorPair::new(fg, bg))
        .collect();

    if !pairs.is_empty() {
        return pairs;
    }

    // Fallback: the globally max-contrast palette pair (spec.md §4.3).
    match palette.max_contrast_pair() {
        Some((a, b)) => vec![ColorPair::new(a, b)],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_threshold_falls_back_to_max_contrast_pair() {
        let cell = Cell::new([Rgb::new(128, 128, 128); 64]);
        let palette = Palette::ansi16();
        let pairs = select(&cell, &palette, 10_000.0);
        assert_eq!(pairs.len(), 1);
        let (a, b) = palette.max_contrast_pair().unwrap();
        assert!(
            (pairs[0].fg, pairs[0].bg) == (a, b) || (pairs[0].fg, pairs[0].bg) == (b, a)
        );
    }

    #[test]
    fn zero_threshold_admits_every_palette_entry() {
        let cell = Cell::new([Rgb::BLACK; 64]);
        let palette = Palette::ansi16();
        let pairs = select(&cell, &palette, 0.0);
        assert_eq!(pairs.len(), palette.len());
    }

    #[test]
    fn empty_palette_yields_no_pairs() {
        let cell = Cell::new([Rgb::BLACK; 64]);
        let palette = Palette::new(vec![]);
        assert!(select(&cell, &palette, 0.0).is_empty());
    }
}
