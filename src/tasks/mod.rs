// Background network work.
// The app requests work as `Effect`s; each runs as its own task and reports back an `AppEvent`.

pub mod dispatch;
pub mod files;
pub mod status;

#[cfg(test)]
pub mod testing;

pub use dispatch::{ScraperInputs, TranslatorInputs, Workflow, WorkflowDispatch};
pub use files::LoadedFile;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::github::{ActionsApi, ContentEntry, WorkflowRun};

/// Network work requested by the app. Sequenced requests carry their request id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Dispatch(WorkflowDispatch),
    RefreshStatus { request: u64 },
    ListFolder { request: u64, folder: String },
    LoadFile { request: u64, path: String },
}

/// Completed network work.
#[derive(Debug)]
pub enum AppEvent {
    Dispatched {
        workflow: Workflow,
        result: Result<()>,
    },
    RunsLoaded {
        request: u64,
        result: Result<Vec<WorkflowRun>>,
    },
    FolderListed {
        request: u64,
        result: Result<Vec<ContentEntry>>,
    },
    FileLoaded {
        request: u64,
        result: Result<LoadedFile>,
    },
}

/// Run one effect to completion.
pub async fn execute<A: ActionsApi>(api: &A, config: &SessionConfig, effect: Effect) -> AppEvent {
    match effect {
        Effect::Dispatch(request) => AppEvent::Dispatched {
            workflow: request.workflow,
            result: dispatch::dispatch(api, config, &request).await,
        },
        Effect::RefreshStatus { request } => AppEvent::RunsLoaded {
            request,
            result: status::recent_runs(api, config).await,
        },
        Effect::ListFolder { request, folder } => AppEvent::FolderListed {
            request,
            result: files::list_folder(api, config, &folder).await,
        },
        Effect::LoadFile { request, path } => AppEvent::FileLoaded {
            request,
            result: files::load_file(api, config, &path).await,
        },
    }
}
