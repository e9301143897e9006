use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::classify::KeywordRules;
use crate::error::ConfigError;
use crate::report::OutputFormat;

pub const DEFAULT_CONFIG_FILE: &str = "nflx.toml";

/// Runner settings. Every field has a default so an absent file is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the titles CSV (or parquet) file.
    pub dataset: PathBuf,
    /// Row limit for the "top K" queries when none is given on the command line.
    pub top_k: usize,
    pub format: OutputFormat,
    pub classification: KeywordRules,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            dataset: PathBuf::from("netflix_titles.csv"),
            top_k: 10,
            format: OutputFormat::Table,
            classification: KeywordRules::default(),
        }
    }
}

/// Loads settings from an optional TOML file, then `NFLX_*` environment variables.
///
/// An explicitly named file must exist; the default `nflx.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("NFLX")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(builder.try_deserialize::<Settings>()?)
}
