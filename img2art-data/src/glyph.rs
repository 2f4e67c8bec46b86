use crate::bitmap::GlyphBitmap;

/// A single rasterized font glyph plus the features derived from its
/// bitmap. The glyph set is built once at startup (by `img2art-core`'s
/// raster module) and is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub codepoint: char,
    pub bitmap: GlyphBitmap,
    pub popcount: u32,
    pub row_weights: [u8; 8],
    pub edge_map: GlyphBitmap,
    pub zone_weights: [u8; 4],
}

impl Glyph {
    /// Derives all features from a bitmap. Feature derivation is a pure
    /// function of the bitmap alone (spec.md §4.1) — this is the only
    /// place a `Glyph` is constructed.
    pub fn from_bitmap(codepoint: char, bitmap: GlyphBitmap) -> Self {
        Self {
            codepoint,
            bitmap,
            popcount: bitmap.popcount(),
            row_weights: bitmap.row_weights(),
            edge_map: bitmap.edge_map(),
            zone_weights: bitmap.zone_weights(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bitmap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_features_are_consistent() {
        let mut bmp = GlyphBitmap::EMPTY;
        for (x, y) in [(0, 0), (1, 1), (2, 2), (7, 7)] {
            bmp.set(x, y);
        }
        let glyph = Glyph::from_bitmap('x', bmp);
        assert_eq!(glyph.popcount, 4);
        assert_eq!(
            glyph.row_weights.iter().map(|&w| w as u32).sum::<u32>(),
            glyph.popcount
        );
        assert_eq!(
            glyph.zone_weights.iter().map(|&w| w as u32).sum::<u32>(),
            glyph.popcount
        );
    }

    #[test]
    fn empty_glyph_reports_empty() {
        let glyph = Glyph::from_bitmap(' ', GlyphBitmap::EMPTY);
        assert!(glyph.is_empty());
        assert_eq!(glyph.popcount, 0);
    }
}
