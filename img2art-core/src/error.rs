/// Error categories for the core optimization engine.
///
/// Recoverable, routine conditions (a missing glyph, an out-of-range
/// pixel read, an empty palette) are absorbed in-line exactly as
/// spec.md §7 mandates and are never represented here — only genuine
/// configuration errors the driver must surface to its caller are.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An unknown color-selector strategy tag was requested.
    #[error("unknown color selector strategy: {0}")]
    UnknownStrategy(String),

    /// A color-selector parameter was out of its valid range.
    #[error("invalid color selector parameter: {0}")]
    InvalidStrategyParams(String),

    /// The source image's dimensions can't be tiled into 8x8 cells and
    /// the caller asked for strict validation rather than truncation.
    #[error("image dimensions {width}x{height} are not both positive multiples of 8")]
    InvalidImageDimensions { width: u32, height: u32 },
}
