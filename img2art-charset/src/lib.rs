//! Restricted character-set policies (spec.md §4.7).
//!
//! A policy is an *ordered* finite set of codepoints — order matters,
//! because the cell optimizer breaks ties by first occurrence in
//! iteration order (spec.md §4.4, §9). Treat this as an ordered
//! container, never a hashed set.

use unicode_width::UnicodeWidthChar;

/// An ordered, iterable character-set policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    chars: Vec<char>,
}

impl CharSet {
    /// Caller-supplied list, preserved verbatim — the caller's order is
    /// the tie-breaking order, so this constructor never reorders or
    /// deduplicates on its own.
    pub fn custom(chars: Vec<char>) -> Self {
        Self { chars }
    }

    pub fn space_only() -> Self {
        Self::custom(vec![' '])
    }

    /// space, light/medium/dark/full shade blocks, and the four half
    /// blocks.
    pub fn density() -> Self {
        Self::custom(vec![' ', '░', '▒', '▓', '█', '▀', '▄', '▌', '▐'])
    }

    pub fn no_space() -> Self {
        Self::custom(Self::density().chars.into_iter().filter(|&c| c != ' ').collect())
    }

    pub fn patterns_only() -> Self {
        Self::custom(
            Self::density()
                .chars
                .into_iter()
                .filter(|&c| c != ' ' && c != '█')
                .collect(),
        )
    }

    /// Density plus the eight quarter-block characters (U+2596..U+259F).
    /// A quarter-block glyph missing from a given font is filtered out
    /// later by the glyph index's `lookup`, never here — this set is
    /// font-agnostic.
    pub fn all_supported_blocks() -> Self {
        let mut chars = Self::density().chars;
        chars.extend(['\u{2596}', '\u{2597}', '\u{2598}', '\u{2599}', '\u{259A}', '\u{259B}', '\u{259C}', '\u{259D}', '\u{259E}', '\u{259F}']);
        Self::custom(chars)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True iff every codepoint in the set renders at single-width in a
    /// monospace terminal grid — a precondition the core assumes (one
    /// codepoint occupies exactly one 8x8 cell).
    pub fn is_single_width(&self) -> bool {
        self.chars
            .iter()
            .all(|&c| c.width().unwrap_or(1) <= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_space_excludes_space_only() {
        let density = CharSet::density();
        let no_space = CharSet::no_space();
        assert_eq!(no_space.len(), density.len() - 1);
        assert!(!no_space.iter().any(|c| c == ' '));
    }

    #[test]
    fn patterns_only_excludes_space_and_full_block() {
        let patterns = CharSet::patterns_only();
        assert!(!patterns.iter().any(|c| c == ' ' || c == '█'));
        assert_eq!(patterns.len(), CharSet::density().len() - 2);
    }

    #[test]
    fn all_supported_blocks_is_superset_of_density() {
        let all = CharSet::all_supported_blocks();
        let density = CharSet::density();
        assert!(density.iter().all(|c| all.iter().any(|a| a == c)));
        assert_eq!(all.len(), density.len() + 10);
    }

    #[test]
    fn custom_preserves_order_and_duplicates() {
        let set = CharSet::custom(vec!['b', 'a', 'b']);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec!['b', 'a', 'b']);
    }

    #[test]
    fn density_charset_is_single_width() {
        assert!(CharSet::density().is_single_width());
        assert!(CharSet::all_supported_blocks().is_single_width());
    }
}
