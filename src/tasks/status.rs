// Workflow run status polling.

use crate::config::SessionConfig;
use crate::error::Result;
use crate::github::{ActionsApi, WorkflowRun};

/// How many recent runs the status panel shows.
pub const RECENT_RUN_COUNT: u32 = 5;

/// Fetch the most recent runs for the configured repository.
pub async fn recent_runs<A: ActionsApi>(
    api: &A,
    config: &SessionConfig,
) -> Result<Vec<WorkflowRun>> {
    config.require_configured()?;
    api.recent_runs(config, RECENT_RUN_COUNT).await
}
