// GitHub API endpoint functions.
// Maps each panel operation onto its REST endpoint.

use crate::config::SessionConfig;
use crate::error::Result;

use super::api::ActionsApi;
use super::client::GitHubClient;
use super::types::{ContentEntry, DispatchRequest, FileContent, WorkflowRun, WorkflowRunsResponse};

pub const RECENT_RUNS_FAILURE: &str = "Failed to fetch workflow runs";
pub const LIST_FOLDER_FAILURE: &str = "Folder not found";
pub const LOAD_FILE_FAILURE: &str = "Failed to load file";

fn repo_endpoint(config: &SessionConfig, rest: &str) -> String {
    format!("/repos/{}/{}/{}", config.owner, config.repo, rest)
}

/// Contents endpoint for a repository path, each segment percent-encoded.
fn contents_endpoint(config: &SessionConfig, path: &str) -> String {
    let encoded: Vec<_> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(urlencoding::encode)
        .collect();
    repo_endpoint(config, &format!("contents/{}", encoded.join("/")))
}

impl ActionsApi for GitHubClient {
    async fn dispatch_workflow(
        &self,
        config: &SessionConfig,
        workflow_file: &str,
        request: &DispatchRequest,
        failure: &'static str,
    ) -> Result<()> {
        let endpoint = repo_endpoint(
            config,
            &format!("actions/workflows/{}/dispatches", workflow_file),
        );
        self.post_json(config, &endpoint, request, failure).await?;
        Ok(())
    }

    async fn recent_runs(&self, config: &SessionConfig, per_page: u32) -> Result<Vec<WorkflowRun>> {
        let params = [("per_page", per_page.to_string())];
        let response = self
            .get_with_params(
                config,
                &repo_endpoint(config, "actions/runs"),
                &params,
                RECENT_RUNS_FAILURE,
            )
            .await?;
        let wrapper: WorkflowRunsResponse = response.json().await?;
        Ok(wrapper.workflow_runs)
    }

    async fn list_contents(&self, config: &SessionConfig, path: &str) -> Result<Vec<ContentEntry>> {
        let response = self
            .get(
                config,
                &contents_endpoint(config, path),
                LIST_FOLDER_FAILURE,
            )
            .await?;
        let entries: Vec<ContentEntry> = response.json().await?;
        Ok(entries)
    }

    async fn file_content(&self, config: &SessionConfig, path: &str) -> Result<FileContent> {
        let response = self
            .get(
                config,
                &contents_endpoint(config, path),
                LOAD_FILE_FAILURE,
            )
            .await?;
        let file: FileContent = response.json().await?;
        Ok(file)
    }
}
