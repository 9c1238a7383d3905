// Storage path utilities.
// Resolves per-user locations for the settings file and the log file.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "quire";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the base config directory (~/.config/quire on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Directory for runtime state such as logs.
/// Falls back to the cache directory on platforms without a state directory.
pub fn state_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.cache_dir())
            .to_path_buf()
    })
}

/// Path to the persisted settings file.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| settings_path_in(&dir))
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    state_dir().map(|dir| dir.join(format!("{}.log", APP_NAME)))
}

pub(crate) fn settings_path_in(dir: &std::path::Path) -> PathBuf {
    dir.join("settings.json")
}
