//! Data model for the img2art terminal-art conversion engine.
//!
//! This crate holds the plain data types the rest of the workspace
//! operates on: colors, palettes, glyph bitmaps, cells and the committed
//! output grid. It has no knowledge of fonts, images, or ANSI escape
//! sequences — those live in the crates that sit around this one.

mod bitmap;
mod block_rune;
mod cell;
mod color_pair;
mod glyph;
mod grid;
mod palette;
mod rgb;
mod working_image;

pub use bitmap::GlyphBitmap;
pub use block_rune::BlockRune;
pub use cell::Cell;
pub use color_pair::ColorPair;
pub use glyph::Glyph;
pub use grid::Grid;
pub use palette::Palette;
pub use rgb::Rgb;
pub use working_image::WorkingImage;
