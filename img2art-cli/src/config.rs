//! `img2art.toml` configuration file (spec.md expansion §1.3), grounded
//! on veloterm's `serde` + `toml` config-loading pattern — the teacher
//! crate has no config-file story of its own.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result};
use serde::Deserialize;

/// Defaults for everything a CLI flag can also override. Any field left
/// out of the TOML file falls back to `Default::default()`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub palette: String,
    pub strategy: String,
    pub k: Option<usize>,
    pub top_n: Option<usize>,
    pub min_contrast: Option<f64>,
    pub levels: Option<usize>,
    pub max_pairs: Option<usize>,
    pub charset: String,
    pub diffusion: bool,
    pub strict_dimensions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: "ansi256".to_string(),
            strategy: "dominant".to_string(),
            k: None,
            top_n: None,
            min_contrast: None,
            levels: None,
            max_pairs: None,
            charset: "density".to_string(),
            diffusion: true,
            strict_dimensions: false,
        }
    }
}

impl Config {
    /// Loads `path` if it exists, otherwise returns the built-in
    /// defaults untouched (a missing config file is not an error).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// The conventional config file location: `$XDG_CONFIG_HOME/img2art/img2art.toml`
    /// or its platform equivalent, via `directories::ProjectDirs`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "img2art").map(|dirs| dirs.config_dir().join("img2art.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/img2art.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_toml_fills_in_remaining_defaults() {
        let dir = std::env::temp_dir().join("img2art-cli-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("img2art.toml");
        std::fs::write(&path, "strategy = \"kmeans\"\nk = 3\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.strategy, "kmeans");
        assert_eq!(config.k, Some(3));
        assert_eq!(config.palette, Config::default().palette);

        std::fs::remove_file(&path).ok();
    }
}
