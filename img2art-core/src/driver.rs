//! The driver (spec.md §4.6, external interface #3): assembles the
//! glyph index, palette, color selector and optimizer into a full-image
//! conversion, optionally diffusing error and reporting progress.

use std::sync::atomic::{AtomicBool, Ordering};

use img2art_charset::CharSet;
use img2art_data::{BlockRune, Grid, Palette, WorkingImage};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::color::ColorSelector;
use crate::diffuser;
use crate::error::Error;
use crate::glyph_index::GlyphIndex;
use crate::optimizer::optimize_cell;

/// Progress reported after each completed cell (not named as a type in
/// the distilled spec, which only says "optionally reports progress" —
/// implemented here as a zero-cost optional callback so the CLI can
/// drive a progress bar without the core depending on one).
#[derive(Debug, Clone, Copy)]
pub struct CellProgress {
    pub completed: usize,
    pub total: usize,
}

/// Converts a full source image into a grid of `BlockRune`s.
///
/// `diffusion` forces strictly sequential, row-major cell visitation
/// (spec.md §5) since each cell's rendering depends on diffused error
/// from every earlier cell. Without diffusion, cells are independent and
/// the loop is parallelized with `rayon`.
///
/// `max_cells` caps how many cells are actually optimized — the
/// remainder are filled with `BlockRune::blank()` (spec.md §5, used by
/// both the cap and mid-run cancellation). `cancel` is polled between
/// cells only in the sequential (diffusion) path; the parallel path
/// checks it per completed cell and stops scheduling new work once set,
/// though in-flight cells still finish.
///
/// `cols = width / 8, rows = height / 8`, floor division: trailing
/// partial cells beyond the last full 8x8 block are never processed
/// (spec.md §4.6). When `strict_dimensions` is set, a source whose width
/// or height isn't a positive multiple of 8 is rejected with
/// `Error::InvalidImageDimensions` instead of being silently truncated
/// (spec.md §7 — truncate-or-reject is a configuration choice).
#[allow(clippy::too_many_arguments)]
pub fn optimize_grid(
    source: &WorkingImage,
    charset: &CharSet,
    glyph_index: &GlyphIndex,
    palette: &Palette,
    color_selector: &ColorSelector,
    diffusion: bool,
    max_cells: Option<usize>,
    cancel: Option<&AtomicBool>,
    progress: Option<&dyn Fn(CellProgress)>,
    strict_dimensions: bool,
) -> Result<Grid<BlockRune>, Error> {
    let (width, height) = (source.width(), source.height());
    if strict_dimensions && (width == 0 || height == 0 || width % 8 != 0 || height % 8 != 0) {
        return Err(Error::InvalidImageDimensions { width, height });
    }

    let cols = (width / 8) as usize;
    let rows = (height / 8) as usize;
    let total = cols * rows;
    let limit = max_cells.unwrap_or(total).min(total);

    info!(cols, rows, diffusion, limit, "starting grid optimization");

    let mut grid = Grid::filled(cols, rows, BlockRune::blank());

    if diffusion {
        let mut working = source.clone();
        let mut completed = 0usize;

        'rows: for row in 0..rows {
            for col in 0..cols {
                if completed >= limit || cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                    break 'rows;
                }

                let cell = working.cell_at(col as u32, row as u32);
                let rune = optimize_cell(&cell, charset, glyph_index, palette, color_selector);
                let glyph_bitmap = glyph_index.lookup(rune.rune).map(|g| g.bitmap).unwrap_or_default();

                diffuser::diffuse_cell(&mut working, col as u32, row as u32, &cell, &rune, glyph_bitmap);
                grid.set(col, row, rune);

                completed += 1;
                if let Some(cb) = progress {
                    cb(CellProgress { completed, total: limit });
                }
                debug!(col, row, rune = %rune.rune, "committed cell");
            }
        }
    } else if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
        // The parallel path has no natural mid-batch checkpoint to poll
        // `cancel` at, so an already-set flag skips the whole batch
        // rather than cancelling partway through (spec.md §5).
    } else {
        let coords: Vec<(usize, usize)> = (0..rows).flat_map(|row| (0..cols).map(move |col| (col, row))).take(limit).collect();

        let runes: Vec<((usize, usize), BlockRune)> = coords
            .par_iter()
            .map(|&(col, row)| {
                let cell = source.cell_at(col as u32, row as u32);
                let rune = optimize_cell(&cell, charset, glyph_index, palette, color_selector);
                ((col, row), rune)
            })
            .collect();

        let committed = runes.len();
        for (i, ((col, row), rune)) in runes.into_iter().enumerate() {
            grid.set(col, row, rune);
            if let Some(cb) = progress {
                cb(CellProgress { completed: i + 1, total: committed });
            }
        }
    }

    Ok(grid)
}
