//! Maps the CLI's/config's string names onto the core's and charset
//! crate's actual types.

use color_eyre::eyre::{eyre, Result};
use img2art_charset::CharSet;
use img2art_data::Palette;

pub fn resolve_palette(name: &str) -> Result<Palette> {
    match name {
        "ansi16" => Ok(Palette::ansi16()),
        "ansi256" => Ok(Palette::ansi256()),
        other => Err(eyre!("unknown palette '{other}', expected ansi16 or ansi256")),
    }
}

pub fn resolve_charset(name: &str) -> Result<CharSet> {
    match name {
        "density" => Ok(CharSet::density()),
        "no-space" => Ok(CharSet::no_space()),
        "patterns-only" => Ok(CharSet::patterns_only()),
        "all-supported-blocks" => Ok(CharSet::all_supported_blocks()),
        "space-only" => Ok(CharSet::space_only()),
        other => Err(eyre!(
            "unknown character set '{other}', expected density, no-space, patterns-only, all-supported-blocks or space-only"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_palette_names_resolve() {
        assert!(resolve_palette("ansi16").is_ok());
        assert!(resolve_palette("ansi256").is_ok());
    }

    #[test]
    fn unknown_palette_name_is_rejected() {
        assert!(resolve_palette("nonsense").is_err());
    }

    #[test]
    fn known_charset_names_resolve() {
        for name in ["density", "no-space", "patterns-only", "all-supported-blocks", "space-only"] {
            assert!(resolve_charset(name).is_ok(), "{name}");
        }
    }
}
