// quire: terminal control panel for the scraper and translator workflows.
// Saves repository settings locally, dispatches GitHub Actions runs, and browses their output.

mod app;
mod config;
mod error;
mod github;
mod logging;
mod render;
mod state;
mod storage;
mod tasks;
mod ui;

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use app::App;
use error::Result;
use github::GitHubClient;
use storage::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = match storage::paths::log_path() {
        Some(path) => Some(logging::init(&path)?),
        None => None,
    };
    tracing::info!("quire v{} starting", env!("CARGO_PKG_VERSION"));

    let store = open_store()?;
    let client = GitHubClient::new()?;
    let mut app = App::new(store);

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableBracketedPaste)?;

    let result = app.run(&mut terminal, client);

    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting with error");
    }
    result
}

/// Settings file in the per-user config directory, or memory if there is none.
fn open_store() -> Result<Box<dyn KeyValueStore>> {
    match storage::paths::settings_path() {
        Some(path) => {
            let store = FileStore::open(path)?;
            tracing::debug!(path = %store.path().display(), "opened settings");
            Ok(Box::new(store))
        }
        None => {
            tracing::warn!("no home directory found, settings will not be persisted");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}
