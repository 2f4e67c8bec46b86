//! Color-selector strategy configuration (spec.md §6 external interface
//! #2): turns a strategy name plus loosely-typed parameters into a
//! validated `ColorSelector`, the way a CLI flag or config file value
//! would arrive at the core boundary.

use crate::color::ColorSelector;
use crate::error::Error;

/// The strategy tags a caller names by string (CLI flag, config file
/// key). Kept separate from `ColorSelector` itself so a string ->
/// strategy parse error (`UnknownStrategy`) is distinguishable from a
/// parameter-range error (`InvalidStrategyParams`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyTag {
    Dominant,
    KMeans,
    Optimized,
    Frequency,
    Contrast,
    Quantized,
    ExhaustiveBounded,
    ExhaustiveTrue,
}

impl StrategyTag {
    pub fn parse(name: &str) -> Result<Self, Error> {
        match name {
            "dominant" => Ok(StrategyTag::Dominant),
            "kmeans" => Ok(StrategyTag::KMeans),
            "optimized" => Ok(StrategyTag::Optimized),
            "frequency" => Ok(StrategyTag::Frequency),
            "contrast" => Ok(StrategyTag::Contrast),
            "quantized" => Ok(StrategyTag::Quantized),
            "exhaustive-bounded" => Ok(StrategyTag::ExhaustiveBounded),
            "exhaustive-true" => Ok(StrategyTag::ExhaustiveTrue),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// Loosely-typed parameters for whichever strategy is in play. Every
/// field is optional; `make_color_selector` fills in the strategy's
/// documented default when a field the strategy needs is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectorParams {
    pub k: Option<usize>,
    pub top_n: Option<usize>,
    pub min_contrast: Option<f64>,
    pub levels: Option<usize>,
    pub max_pairs: Option<usize>,
}

const DEFAULT_K: usize = 2;
const DEFAULT_TOP_N: usize = 2;
const DEFAULT_MIN_CONTRAST: f64 = 60.0;
const DEFAULT_LEVELS: usize = 4;
const DEFAULT_MAX_PAIRS: usize = 64;

/// Validates `params` against `tag` and builds the corresponding
/// `ColorSelector` (spec.md §6 external interface #2).
pub fn make_color_selector(tag: StrategyTag, params: &SelectorParams) -> Result<ColorSelector, Error> {
    match tag {
        StrategyTag::Dominant => Ok(ColorSelector::Dominant),

        StrategyTag::KMeans => {
            let k = params.k.unwrap_or(DEFAULT_K);
            if k == 0 {
                return Err(Error::InvalidStrategyParams("k must be at least 1".into()));
            }
            Ok(ColorSelector::KMeans { k })
        }

        StrategyTag::Optimized => {
            let k = params.k.unwrap_or(DEFAULT_K);
            if k == 0 {
                return Err(Error::InvalidStrategyParams("k must be at least 1".into()));
            }
            Ok(ColorSelector::Optimized { k })
        }

        StrategyTag::Frequency => {
            let top_n = params.top_n.unwrap_or(DEFAULT_TOP_N);
            if top_n == 0 {
                return Err(Error::InvalidStrategyParams("top_n must be at least 1".into()));
            }
            Ok(ColorSelector::Frequency { top_n })
        }

        StrategyTag::Contrast => {
            let min_contrast = params.min_contrast.unwrap_or(DEFAULT_MIN_CONTRAST);
            if !(0.0..=441.7).contains(&min_contrast) {
                return Err(Error::InvalidStrategyParams(
                    "min_contrast must be within [0, 441.7] (the max possible RGB distance)".into(),
                ));
            }
            Ok(ColorSelector::Contrast { min_contrast })
        }

        StrategyTag::Quantized => {
            let levels = params.levels.unwrap_or(DEFAULT_LEVELS);
            if levels == 0 {
                return Err(Error::InvalidStrategyParams("levels must be at least 1".into()));
            }
            Ok(ColorSelector::Quantized { levels })
        }

        StrategyTag::ExhaustiveBounded => {
            let max_pairs = params.max_pairs.unwrap_or(DEFAULT_MAX_PAIRS);
            if max_pairs == 0 {
                return Err(Error::InvalidStrategyParams("max_pairs must be at least 1".into()));
            }
            Ok(ColorSelector::ExhaustiveBounded { max_pairs })
        }

        StrategyTag::ExhaustiveTrue => Ok(ColorSelector::ExhaustiveTrue),
    }
}
