//! Error types for model loading and output writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while obtaining or parsing the options model.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[cfg(not(feature = "remote"))]
    #[error("remote sources require the `remote` feature: {url}")]
    RemoteDisabled { url: String },

    #[error("model is not valid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected model shape: {source}")]
    InvalidModel {
        #[source]
        source: serde_json::Error,
    },
}

/// Errors while writing the pruned record list.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot encode records: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
