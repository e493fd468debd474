//! Options model loading from the bundled snapshot, files, and HTTP URLs,
//! plus writing of the pruned record list.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{LoadError, WriteError};
use crate::model::PropertyRecord;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Snapshot of the vendor options dump shipped with the tool. Used when no
/// source is given, same as the classpath resource in earlier releases.
const BUNDLED_MODEL: &str = include_str!("../resources/highcharts-options.json");

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// The upstream api server rejects requests without a browser user agent,
/// so identify as one. Compatibility measure, not a security control.
#[cfg(feature = "remote")]
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_5) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Load the raw options model from `source`.
///
/// `None` parses the bundled snapshot; an `http://`/`https://` source is
/// fetched remotely (requires the `remote` feature, enabled by default);
/// anything else is treated as a local file path.
///
/// # Errors
///
/// Returns the [`LoadError`] variant matching the failing source kind.
pub fn load_model(source: Option<&str>) -> Result<Value, LoadError> {
    match source {
        None => load_model_str(BUNDLED_MODEL),
        Some(s) if is_url(s) => load_model_url(s),
        Some(path) => load_model_file(Path::new(path)),
    }
}

/// Parse an options model from a JSON string.
pub fn load_model_str(content: &str) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

/// Load an options model from a local file.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// `LoadError::ReadError` on I/O failure, or `LoadError::InvalidJson` if the
/// content isn't valid JSON.
pub fn load_model_file(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_model_str(&content)
}

/// Fetch an options model from an HTTP/HTTPS URL.
///
/// # Errors
///
/// Returns `LoadError::NetworkError` if the request fails or the server
/// responds with an error status, or `LoadError::InvalidJson` if the body
/// isn't valid JSON.
#[cfg(feature = "remote")]
pub fn load_model_url(url: &str) -> Result<Value, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|source| LoadError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .map_err(|source| LoadError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    // Check for HTTP errors before parsing
    let response = response
        .error_for_status()
        .map_err(|source| LoadError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    let body = response.text().map_err(|source| LoadError::NetworkError {
        url: url.to_string(),
        source,
    })?;

    load_model_str(&body)
}

#[cfg(not(feature = "remote"))]
pub fn load_model_url(url: &str) -> Result<Value, LoadError> {
    Err(LoadError::RemoteDisabled {
        url: url.to_string(),
    })
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Deserialize the raw model into property records.
///
/// The model is a flat JSON array of property objects; unknown fields inside
/// each object are ignored.
///
/// # Errors
///
/// Returns `LoadError::InvalidModel` if the document isn't an array of the
/// recognized object shape.
pub fn parse_records(model: &Value) -> Result<Vec<PropertyRecord>, LoadError> {
    Vec::<PropertyRecord>::deserialize(model).map_err(|source| LoadError::InvalidModel { source })
}

/// Write records to `path` as a JSON array, replacing any existing content.
///
/// # Errors
///
/// Returns `WriteError::Encode` if serialization fails or `WriteError::Io`
/// if the destination cannot be written.
pub fn write_records(
    records: &[PropertyRecord],
    path: &Path,
    pretty: bool,
) -> Result<(), WriteError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(|source| WriteError::Encode { source })?;

    std::fs::write(path, encoded).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
