// Session configuration.
// The credentials and repository coordinates every GitHub call is made with.

use std::fmt;

use crate::error::{QuireError, Result};
use crate::storage::KeyValueStore;

pub const KEY_TOKEN: &str = "gh_token";
pub const KEY_OWNER: &str = "gh_owner";
pub const KEY_REPO: &str = "gh_repo";
pub const KEY_SOURCE_URL: &str = "config_url";
pub const KEY_BASE_DIR: &str = "config_base_dir";

/// Content root used when no base directory is configured.
pub const FALLBACK_BASE_DIR: &str = "bjXRF";

/// Settings for the target repository.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Personal access token.
    pub token: String,
    pub owner: String,
    pub repo: String,
    /// Source site the scraper reads chapters from.
    pub source_url: String,
    /// Repository directory that holds the content folders.
    pub base_dir: String,
}

impl SessionConfig {
    /// Read all five settings, treating absent keys as empty.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let read = |key: &str| store.get(key).unwrap_or_default();
        Self {
            token: read(KEY_TOKEN),
            owner: read(KEY_OWNER),
            repo: read(KEY_REPO),
            source_url: read(KEY_SOURCE_URL),
            base_dir: read(KEY_BASE_DIR),
        }
    }

    /// Write all five settings, overwriting whatever was stored.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(KEY_TOKEN, &self.token)?;
        store.set(KEY_OWNER, &self.owner)?;
        store.set(KEY_REPO, &self.repo)?;
        store.set(KEY_SOURCE_URL, &self.source_url)?;
        store.set(KEY_BASE_DIR, &self.base_dir)?;
        Ok(())
    }

    /// Whether a token and repository name are present.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.repo.is_empty()
    }

    pub fn require_configured(&self) -> Result<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(QuireError::MissingConfig)
        }
    }

    /// Base directory for browsing, or the fallback when unset.
    pub fn content_root(&self) -> &str {
        if self.base_dir.is_empty() {
            FALLBACK_BASE_DIR
        } else {
            &self.base_dir
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("SessionConfig")
            .field("token", &token)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("source_url", &self.source_url)
            .field("base_dir", &self.base_dir)
            .finish()
    }
}
