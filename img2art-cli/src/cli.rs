use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Report};

#[derive(Parser, Debug)]
#[command(
    name = "img2art",
    about = "Converts an image into colored terminal block art",
    long_about = "Converts a raster image into an 8x8-cell grid of colored terminal characters, \
                  jointly optimizing glyph and color choice per cell."
)]
pub struct Cli {
    /// Input image path (PNG, JPEG, ...)
    #[arg(value_name = "IMAGE")]
    pub input: PathBuf,

    /// Path to a TrueType/OpenType font file used to rasterize the
    /// character set. Required: there is no automatic system-font lookup.
    #[arg(long, value_name = "FONT")]
    pub font: Option<PathBuf>,

    /// Font size in points used for rasterization
    #[arg(long, default_value = "8.0", value_name = "SIZE")]
    pub font_size: f32,

    /// Palette: "ansi16" or "ansi256"
    #[arg(long, value_name = "PALETTE")]
    pub palette: Option<String>,

    /// Color selector strategy: dominant, kmeans, optimized, frequency,
    /// contrast, quantized, exhaustive-bounded, exhaustive-true
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<String>,

    /// Cluster count for kmeans/optimized/quantized strategies
    #[arg(long, value_name = "K")]
    pub k: Option<usize>,

    /// Candidate count for the frequency strategy
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Minimum RGB distance for the contrast strategy
    #[arg(long, value_name = "DISTANCE")]
    pub min_contrast: Option<f64>,

    /// Quantization level count for the quantized strategy
    #[arg(long, value_name = "LEVELS")]
    pub levels: Option<usize>,

    /// Pair cap for the exhaustive-bounded strategy
    #[arg(long, value_name = "MAX")]
    pub max_pairs: Option<usize>,

    /// Character set policy: density, no-space, patterns-only,
    /// all-supported-blocks, space-only
    #[arg(long, value_name = "CHARSET")]
    pub charset: Option<String>,

    /// Disable Floyd-Steinberg error diffusion
    #[arg(long)]
    pub no_diffusion: bool,

    /// Reject images whose dimensions aren't a positive multiple of 8x8
    /// instead of silently truncating to the largest enclosed grid
    #[arg(long)]
    pub strict_dimensions: bool,

    /// Output path; "-" (default) writes ANSI text to stdout
    #[arg(short = 'o', long, default_value = "-", value_name = "PATH")]
    pub output: String,

    /// Path to an `img2art.toml` config file; defaults to the
    /// platform-conventional config directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> Result<(), Report> {
        if self.font_size <= 0.0 {
            return Err(eyre!("font size must be positive"));
        }
        if let Some(k) = self.k {
            if k == 0 {
                return Err(eyre!("k must be at least 1"));
            }
        }
        Ok(())
    }
}
