// Operations the panel needs from GitHub.
// Implemented over HTTP by `GitHubClient`; tests substitute an in-memory fake.

use std::future::Future;

use crate::config::SessionConfig;
use crate::error::Result;

use super::types::{ContentEntry, DispatchRequest, FileContent, WorkflowRun};

pub trait ActionsApi {
    /// Start `workflow_file` with the given ref and inputs.
    /// `failure` is reported if GitHub rejects the dispatch.
    fn dispatch_workflow(
        &self,
        config: &SessionConfig,
        workflow_file: &str,
        request: &DispatchRequest,
        failure: &'static str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Most recent runs across all workflows, newest first.
    fn recent_runs(
        &self,
        config: &SessionConfig,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<WorkflowRun>>> + Send;

    /// Entries directly under `path`.
    fn list_contents(
        &self,
        config: &SessionConfig,
        path: &str,
    ) -> impl Future<Output = Result<Vec<ContentEntry>>> + Send;

    /// A single file, content still base64-encoded.
    fn file_content(
        &self,
        config: &SessionConfig,
        path: &str,
    ) -> impl Future<Output = Result<FileContent>> + Send;
}
