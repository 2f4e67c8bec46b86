use crate::rgb::Rgb;

/// The committed per-cell result: a character plus the foreground and
/// background colors it should be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRune {
    pub rune: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl BlockRune {
    pub const fn new(rune: char, fg: Rgb, bg: Rgb) -> Self {
        Self { rune, fg, bg }
    }

    /// The filler emitted for skipped/cancelled cells (spec.md §4.6, §5).
    pub const fn blank() -> Self {
        Self::new(' ', Rgb::BLACK, Rgb::BLACK)
    }
}
