// Error types for quire.
// Covers GitHub API failures, missing configuration, content decoding, and storage errors.

#![allow(dead_code)]

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuireError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Please configure GitHub settings first.")]
    MissingConfig,

    /// Non-success response. Only the static description is displayed.
    #[error("{message}")]
    Remote {
        message: &'static str,
        status: StatusCode,
    },

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("File content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid settings file {}: {source}", .path.display())]
    Settings {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuireError>;
