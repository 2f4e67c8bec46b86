use crate::rgb::Rgb;

/// An ordered, immutable list of palette colors. Built once, shared
/// freely across threads (spec.md §5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the palette entry nearest `target` by squared Euclidean
    /// distance. Ties favor the lower index (first occurrence), matching
    /// the spec's general first-occurrence tie-breaking rule.
    pub fn nearest_index(&self, target: Rgb) -> Option<usize> {
        self.colors
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| c.distance_squared(target))
            .map(|(i, _)| i)
    }

    pub fn nearest(&self, target: Rgb) -> Option<Rgb> {
        self.nearest_index(target).map(|i| self.colors[i])
    }

    /// The pair of palette entries with maximum mutual distance — the
    /// global max-contrast fallback used by the Contrast selector.
    pub fn max_contrast_pair(&self) -> Option<(Rgb, Rgb)> {
        if self.colors.len() < 2 {
            return self.colors.first().map(|&c| (c, c));
        }

        let mut best: Option<(Rgb, Rgb, u32)> = None;
        for i in 0..self.colors.len() {
            for j in (i + 1)..self.colors.len() {
                let a = self.colors[i];
                let b = self.colors[j];
                let d = a.distance_squared(b);
                if best.map(|(_, _, bd)| d > bd).unwrap_or(true) {
                    best = Some((a, b, d));
                }
            }
        }
        best.map(|(a, b, _)| (a, b))
    }

    /// The 16-color ANSI palette (standard + bright variants), in
    /// conventional SGR-index order.
    pub fn ansi16() -> Self {
        Self::new(vec![
            Rgb::new(0, 0, 0),
            Rgb::new(170, 0, 0),
            Rgb::new(0, 170, 0),
            Rgb::new(170, 85, 0),
            Rgb::new(0, 0, 170),
            Rgb::new(170, 0, 170),
            Rgb::new(0, 170, 170),
            Rgb::new(170, 170, 170),
            Rgb::new(85, 85, 85),
            Rgb::new(255, 85, 85),
            Rgb::new(85, 255, 85),
            Rgb::new(255, 255, 85),
            Rgb::new(85, 85, 255),
            Rgb::new(255, 85, 255),
            Rgb::new(85, 255, 255),
            Rgb::new(255, 255, 255),
        ])
    }

    /// The full 256-color xterm palette: 16 ANSI colors, a 6x6x6 color
    /// cube, and a 24-step grayscale ramp.
    pub fn ansi256() -> Self {
        let mut colors = Self::ansi16().colors;

        const STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];
        for r in 0..6 {
            for g in 0..6 {
                for b in 0..6 {
                    colors.push(Rgb::new(STEPS[r], STEPS[g], STEPS[b]));
                }
            }
        }

        for i in 0..24u8 {
            let v = 8 + i * 10;
            colors.push(Rgb::new(v, v, v));
        }

        Self::new(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_picks_exact_match() {
        let p = Palette::ansi16();
        assert_eq!(p.nearest(Rgb::new(0, 0, 0)), Some(Rgb::BLACK));
        assert_eq!(p.nearest(Rgb::new(255, 255, 255)), Some(Rgb::WHITE));
    }

    #[test]
    fn ansi256_has_256_entries() {
        assert_eq!(Palette::ansi256().len(), 256);
    }

    #[test]
    fn max_contrast_pair_of_ansi16_is_black_and_white() {
        let p = Palette::ansi16();
        let (a, b) = p.max_contrast_pair().unwrap();
        let pair = (a, b);
        assert!(
            pair == (Rgb::BLACK, Rgb::WHITE) || pair == (Rgb::WHITE, Rgb::BLACK),
            "expected black/white, got {pair:?}"
        );
    }

    #[test]
    fn single_entry_palette_contrast_pair_is_itself() {
        let p = Palette::new(vec![Rgb::new(1, 2, 3)]);
        assert_eq!(p.max_contrast_pair(), Some((Rgb::new(1, 2, 3), Rgb::new(1, 2, 3))));
    }

    #[test]
    fn empty_palette_has_no_nearest() {
        let p = Palette::new(vec![]);
        assert_eq!(p.nearest(Rgb::BLACK), None);
        assert_eq!(p.max_contrast_pair(), None);
    }
}
