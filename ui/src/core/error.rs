//! Errors raised while fetching and ingesting datasets.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP fetch failed or returned a non-success status.
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{column}' not found in header")]
    MissingColumn { column: &'static str },

    #[error("dataset is not valid UTF-8")]
    Encoding,
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;
