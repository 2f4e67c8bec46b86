use crate::rgb::Rgb;

/// An ordered (foreground, background) pair proposed for a cell by a
/// color selector. Pairs are ephemeral per-cell outputs; duplicates
/// across selectors are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl ColorPair {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }

    pub const fn swapped(self) -> Self {
        Self { fg: self.bg, bg: self.fg }
    }
}
