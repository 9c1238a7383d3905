// Repository file browsing.
// Lists content folders and fetches single files through the contents API.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::config::SessionConfig;
use crate::error::{QuireError, Result};
use crate::github::{ActionsApi, ContentEntry};

/// Content folders the workflows write into, relative to the base directory.
pub const FOLDERS: [&str; 3] = ["raw_chinese", "raw_vietnamese", "edited_vietnamese"];

pub const LOAD_FILE_ERROR: &str = "Error loading file content";

/// A fetched file with its content decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: String,
    pub text: String,
    /// Blob checksum GitHub requires to overwrite this file. Passed through untouched.
    pub sha: Option<String>,
}

/// Repository path of a content folder.
pub fn folder_path(config: &SessionConfig, folder: &str) -> String {
    format!("{}/{}", config.content_root(), folder)
}

pub fn list_error_notice(error: &QuireError) -> String {
    match error {
        QuireError::MissingConfig => error.to_string(),
        _ => format!("Error loading files: {}", error),
    }
}

pub fn load_error_notice(error: &QuireError) -> String {
    match error {
        QuireError::MissingConfig => error.to_string(),
        _ => LOAD_FILE_ERROR.to_string(),
    }
}

/// Decode a contents API payload. GitHub wraps the base64 at 60 columns.
pub fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}

/// Entries directly under `folder`. No recursion and no path probing.
pub async fn list_folder<A: ActionsApi>(
    api: &A,
    config: &SessionConfig,
    folder: &str,
) -> Result<Vec<ContentEntry>> {
    config.require_configured()?;

    let path = folder_path(config, folder);
    tracing::debug!(%path, "listing folder");
    api.list_contents(config, &path).await
}

/// Fetch and decode one file.
pub async fn load_file<A: ActionsApi>(
    api: &A,
    config: &SessionConfig,
    path: &str,
) -> Result<LoadedFile> {
    config.require_configured()?;

    let file = api.file_content(config, path).await?;
    // Files over 1 MB come back with `encoding: "none"` and no content
    match file.encoding.as_deref() {
        Some("base64") => {}
        other => {
            tracing::warn!(%path, encoding = ?other, "unsupported content encoding");
            return Err(QuireError::Other(format!(
                "unsupported content encoding: {}",
                other.unwrap_or("missing")
            )));
        }
    }
    let text = decode_content(&file.content)?;
    Ok(LoadedFile {
        path: path.to_string(),
        text,
        sha: file.sha,
    })
}
