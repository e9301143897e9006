use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failure to turn the source file into a title set. Always fatal.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read dataset: {0}")]
    Polars(#[from] PolarsError),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' has invalid value {value:?}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Failure local to a single query invocation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("division by zero: no titles match {0}")]
    DivisionByZero(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid keyword for category '{category}': {source}")]
    Keyword {
        category: String,
        #[source]
        source: regex::Error,
    },
}
