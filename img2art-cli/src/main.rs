mod cli;
mod config;
mod logging;
mod render;
mod resolve;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use img2art_core::{build_glyphs, make_color_selector, optimize_grid, GlyphIndex, SelectorParams, StrategyTag};
use img2art_data::WorkingImage;
use img2art_rasterizer::FontRasterizer;

use crate::cli::Cli;
use crate::config::Config;
use crate::logging::{init_logging, LoggingConfig};

fn main() -> Result<()> {
    color_eyre::install()?;

    let (_guard, _reload_handle) = init_logging(LoggingConfig::from_env())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "img2art starting up");

    let args = Cli::parse();
    args.validate()?;

    let config_path = args.config.clone().or_else(Config::default_path).unwrap_or_else(|| "img2art.toml".into());
    let file_config = Config::load(&config_path)?;

    let palette_name = args.palette.clone().unwrap_or(file_config.palette.clone());
    let strategy_name = args.strategy.clone().unwrap_or(file_config.strategy.clone());
    let charset_name = args.charset.clone().unwrap_or(file_config.charset.clone());
    let diffusion = if args.no_diffusion { false } else { file_config.diffusion };
    let strict_dimensions = args.strict_dimensions || file_config.strict_dimensions;
    let k = args.k.or(file_config.k);
    let top_n = args.top_n.or(file_config.top_n);
    let min_contrast = args.min_contrast.or(file_config.min_contrast);
    let levels = args.levels.or(file_config.levels);
    let max_pairs = args.max_pairs.or(file_config.max_pairs);

    let palette = resolve::resolve_palette(&palette_name)?;
    let charset = resolve::resolve_charset(&charset_name)?;

    let strategy_tag = StrategyTag::parse(&strategy_name).map_err(|e| eyre!("{e}"))?;
    let params = SelectorParams { k, top_n, min_contrast, levels, max_pairs };
    let color_selector = make_color_selector(strategy_tag, &params).map_err(|e| eyre!("{e}"))?;

    let font_path = args.font.clone().ok_or_else(|| eyre!("a font file is required: pass --font <PATH>"))?;
    let rasterizer = FontRasterizer::load(&font_path, args.font_size)?;

    let glyphs = build_glyphs(charset.iter(), |c| rasterizer.rasterize(c), |_| true);
    tracing::info!(glyph_count = glyphs.len(), "rasterized character set");
    let glyph_index = GlyphIndex::new(glyphs);

    let decoded = image::open(&args.input)?.to_rgb8();
    let (width, height) = (decoded.width(), decoded.height());
    let source = WorkingImage::from_rgb_bytes(decoded.as_raw(), width, height);

    let grid = optimize_grid(
        &source,
        &charset,
        &glyph_index,
        &palette,
        &color_selector,
        diffusion,
        None,
        None,
        None,
        strict_dimensions,
    )
    .map_err(|e| eyre!("{e}"))?;

    let text = render::render_ansi(&grid);
    if args.output == "-" {
        print!("{text}");
    } else {
        std::fs::write(&args.output, text)?;
    }

    Ok(())
}
