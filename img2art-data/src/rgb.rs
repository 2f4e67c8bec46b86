/// An 8-bit-per-channel RGB color, no alpha.
///
/// This is the only color representation the core deals in; everything
/// upstream (image decoding, palette files) is expected to hand in plain
/// `Rgb` triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean RGB distance, as used by every error/similarity computation
    /// in the core. Returned as `f64` since squared channel differences can
    /// exceed `u16` range when accumulated.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Squared distance — avoids the `sqrt` when only relative ordering
    /// matters (nearest-palette-entry search, dominant-color ranking).
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Coarse-quantized bucket key: drop the low 3 bits of each channel.
    /// Used by the dominant-color and frequency selectors to merge
    /// near-identical pixels before counting.
    pub fn quantize_bucket(self, drop_bits: u32) -> (u8, u8, u8) {
        let mask = !0u8 << drop_bits;
        (self.r & mask, self.g & mask, self.b & mask)
    }

    pub fn average(colors: &[Rgb]) -> Rgb {
        if colors.is_empty() {
            return Rgb::BLACK;
        }

        let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
        for c in colors {
            r += u32::from(c.r);
            g += u32::from(c.g);
            b += u32::from(c.b);
        }
        let n = colors.len() as u32;
        Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
    }
}
