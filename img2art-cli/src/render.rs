//! Renders a `Grid<BlockRune>` as ANSI text. Only solid truecolor fg/bg
//! SGR codes plus the rune itself are ever emitted — no bold, underline
//! or blink (spec.md Non-goals, restated in SPEC_FULL.md §4).

use img2art_data::{BlockRune, Grid, Rgb};

fn sgr_fg(c: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b)
}

fn sgr_bg(c: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", c.r, c.g, c.b)
}

const RESET: &str = "\x1b[0m";

/// Renders the full grid to a single ANSI string, one line per row,
/// each line reset at the end so it composes safely with surrounding
/// terminal output.
pub fn render_ansi(grid: &Grid<BlockRune>) -> String {
    let mut out = String::new();

    for row in 0..grid.rows() {
        let mut last: Option<(Rgb, Rgb)> = None;
        for col in 0..grid.cols() {
            let rune = grid.get(col, row);
            if last != Some((rune.fg, rune.bg)) {
                out.push_str(&sgr_fg(rune.fg));
                out.push_str(&sgr_bg(rune.bg));
                last = Some((rune.fg, rune.bg));
            }
            out.push(rune.rune);
        }
        out.push_str(RESET);
        out.push('\n');
    }

    out
}
