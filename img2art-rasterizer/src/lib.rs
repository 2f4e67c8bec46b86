//! Native font rasterization (mirrors `beamterm-rasterizer`'s role:
//! swash + fontdb, no GPU, no windowing). Produces the 8x8 alpha raster
//! `img2art-core::raster::build_glyphs` expects from its `rasterize_fn`
//! callback — this crate is the concrete collaborator the core's
//! external interface is written against, never a dependency of it.

mod error;

use std::path::Path;
use std::sync::Arc;

pub use error::{FontLoadError, RasterizeError};

use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::{CacheKey, FontRef};
use tracing::{debug, trace, warn};

/// A loaded font face plus the 8x8-cell scaling parameters needed to
/// rasterize single codepoints for the core's glyph index.
pub struct FontRasterizer {
    data: Arc<Vec<u8>>,
    face_index: u32,
    cache_key: CacheKey,
    font_size: f32,
}

impl FontRasterizer {
    /// Loads a font file via `fontdb` and picks its first face.
    pub fn load(path: &Path, font_size: f32) -> Result<Self, FontLoadError> {
        if !path.exists() {
            return Err(FontLoadError::NotFound(path.to_path_buf()));
        }

        let mut db = fontdb::Database::new();
        db.load_font_file(path)?;
        let face_id = db.faces().next().map(|f| f.id).ok_or(FontLoadError::NoFace)?;

        let data = db
            .with_face_data(face_id, |data, _| data.to_vec())
            .ok_or(FontLoadError::NoFace)?;

        Self::from_bytes(data, font_size)
    }

    /// Builds a rasterizer directly from in-memory font bytes, bypassing
    /// `fontdb` discovery entirely (used by tests and embedded fonts).
    pub fn from_bytes(data: Vec<u8>, font_size: f32) -> Result<Self, FontLoadError> {
        let font_ref = FontRef::from_index(&data, 0).ok_or(FontLoadError::NoFace)?;
        let cache_key = font_ref.key;
        let face_index = font_ref.offset;

        debug!(font_size, "loaded font face for rasterization");

        Ok(Self { data: Arc::new(data), face_index, cache_key, font_size })
    }

    fn font_ref(&self) -> FontRef<'_> {
        FontRef { data: self.data.as_slice(), offset: self.face_index, key: self.cache_key }
    }

    /// Rasterizes `codepoint` into an 8x8 alpha-coverage grid, or `None`
    /// if the font has no glyph for it — the exact contract
    /// `img2art-core::raster::build_glyphs`'s `rasterize_fn` expects.
    pub fn rasterize(&self, codepoint: char) -> Option<[[u8; 8]; 8]> {
        let font = self.font_ref();
        let glyph_id = font.charmap().map(codepoint);
        if glyph_id == 0 {
            trace!(codepoint = %codepoint, "no glyph id for codepoint");
            return None;
        }

        let mut context = ScaleContext::new();
        let mut scaler = context.builder(font).size(self.font_size).hint(true).build();

        let image = Render::new(&[Source::Outline]).format(Format::Alpha).render(&mut scaler, glyph_id)?;

        if image.placement.width == 0 || image.placement.height == 0 {
            // whitespace-like glyphs (e.g. space itself) rasterize empty.
            return Some([[0u8; 8]; 8]);
        }

        Some(resample_to_8x8(&image.data, image.placement.width, image.placement.height))
    }
}

/// Nearest-neighbor downsample of an arbitrary-size alpha coverage
/// bitmap into the core's fixed 8x8 cell. Good enough for the coarse
/// 8x8 raster the core operates on; area averaging would cost more than
/// it buys at this resolution.
fn resample_to_8x8(data: &[u8], width: u32, height: u32) -> [[u8; 8]; 8] {
    let mut cell = [[0u8; 8]; 8];
    if width == 0 || height == 0 {
        return cell;
    }

    for (cy, row) in cell.iter_mut().enumerate() {
        for (cx, out) in row.iter_mut().enumerate() {
            let sx = (cx as u32 * width) / 8;
            let sy = (cy as u32 * height) / 8;
            let idx = (sy * width + sx) as usize;
            *out = data.get(idx).copied().unwrap_or(0);
        }
    }
    cell
}

/// Discovers monospace font families installed on the system, the way
/// `FontDiscovery` does for the teacher's GPU atlas generator — used by
/// the CLI to offer a font picker instead of requiring a file path.
pub struct FontDiscovery {
    db: fontdb::Database,
}

impl FontDiscovery {
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self { db }
    }

    /// Family names of every monospace face the system reports.
    pub fn monospace_families(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .db
            .faces()
            .filter(|f| f.monospaced)
            .filter_map(|f| f.families.first().map(|(name, _)| name.clone()))
            .collect();
        names.sort();
        names.dedup();
        if names.is_empty() {
            warn!("no monospace font families found on this system");
        }
        names
    }
}

impl Default for FontDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
