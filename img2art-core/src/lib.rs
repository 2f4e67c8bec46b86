//! The img2art optimization engine (spec.md §1, §4).
//!
//! Turns a decoded image and a glyph/palette/color-selector
//! configuration into a grid of `BlockRune`s. Never touches a real
//! font file, an image codec, or ANSI escape sequences — those are the
//! concern of the crates that sit around this one.

mod color;
mod config;
mod diffuser;
mod error;
mod glyph_index;
mod monochrome;
mod optimizer;
mod raster;

pub mod driver;

pub use color::ColorSelector;
pub use config::{make_color_selector, SelectorParams, StrategyTag};
pub use driver::{optimize_grid, CellProgress};
pub use error::Error;
pub use glyph_index::GlyphIndex;
pub use optimizer::optimize_cell;
pub use raster::{build_glyphs, rasterize_glyph, threshold_alpha};

/// Monochrome/structural glyph matching (spec.md §4.2, §9 open
/// question). Re-exported as a module, not flattened, since it exposes
/// two distinct scoring functions a caller picks between rather than a
/// single entry point.
pub mod monochrome_match {
    pub use crate::monochrome::{best_match, hamming_score, structural_score};
}
