// GitHub API request and response types.
// Covers workflow runs, repository contents, and workflow dispatch bodies.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub Actions workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    #[serde(default)]
    pub id: u64,
    pub name: Option<String>,
    pub run_number: u64,
    pub status: RunStatus,
    pub conclusion: Option<RunConclusion>,
    pub created_at: Option<DateTime<Utc>>,
    pub html_url: Option<String>,
}

/// Response wrapper for workflow runs list.
#[derive(Debug, Deserialize)]
pub struct WorkflowRunsResponse {
    #[serde(default)]
    pub total_count: u64,
    pub workflow_runs: Vec<WorkflowRun>,
}

/// Workflow run status. Values GitHub adds later keep their wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Waiting,
    Requested,
    Pending,
    #[serde(untagged)]
    Other(String),
}

impl RunStatus {
    /// Wire name, as GitHub spells it.
    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::Completed => "completed",
            RunStatus::Waiting => "waiting",
            RunStatus::Requested => "requested",
            RunStatus::Pending => "pending",
            RunStatus::Other(name) => name,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow run conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunConclusion {
    Success,
    Failure,
    Cancelled,
    Skipped,
    TimedOut,
    ActionRequired,
    Neutral,
    Stale,
    StartupFailure,
    #[serde(untagged)]
    Other(String),
}

impl RunConclusion {
    pub fn as_str(&self) -> &str {
        match self {
            RunConclusion::Success => "success",
            RunConclusion::Failure => "failure",
            RunConclusion::Cancelled => "cancelled",
            RunConclusion::Skipped => "skipped",
            RunConclusion::TimedOut => "timed_out",
            RunConclusion::ActionRequired => "action_required",
            RunConclusion::Neutral => "neutral",
            RunConclusion::Stale => "stale",
            RunConclusion::StartupFailure => "startup_failure",
            RunConclusion::Other(name) => name,
        }
    }
}

impl fmt::Display for RunConclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a repository contents entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Unknown,
}

/// One entry of a directory listing from the contents API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub sha: Option<String>,
    pub size: Option<u64>,
}

/// A single file from the contents API. `content` is base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    pub sha: Option<String>,
    pub content: String,
    pub encoding: Option<String>,
}

/// Body of a workflow dispatch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchRequest {
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// GitHub only accepts string-typed inputs.
    pub inputs: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_runs_response() {
        let json = r#"{
            "total_count": 2,
            "workflow_runs": [
                {"id": 1, "name": "Scraper", "run_number": 12, "status": "completed",
                 "conclusion": "success", "created_at": "2026-01-02T03:04:05Z"},
                {"id": 2, "name": null, "run_number": 13, "status": "in_progress",
                 "conclusion": null}
            ]
        }"#;

        let response: WorkflowRunsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.workflow_runs.len(), 2);

        let first = &response.workflow_runs[0];
        assert_eq!(first.name.as_deref(), Some("Scraper"));
        assert_eq!(first.status, RunStatus::Completed);
        assert_eq!(first.conclusion, Some(RunConclusion::Success));
        assert!(first.created_at.is_some());

        let second = &response.workflow_runs[1];
        assert_eq!(second.status, RunStatus::InProgress);
        assert_eq!(second.conclusion, None);
    }

    #[test]
    fn test_unknown_status_values() {
        let run: WorkflowRun = serde_json::from_str(
            r#"{"run_number": 1, "status": "brand_new", "conclusion": "also_new"}"#,
        )
        .unwrap();
        assert_eq!(run.status, RunStatus::Other("brand_new".to_string()));
        assert_eq!(run.conclusion, Some(RunConclusion::Other("also_new".to_string())));
        assert_eq!(run.status.to_string(), "brand_new");
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(RunStatus::InProgress.to_string(), "in_progress");
        assert_eq!(RunConclusion::TimedOut.to_string(), "timed_out");
    }

    #[test]
    fn test_deserialize_contents_listing() {
        let json = r#"[
            {"name": "ch1.txt", "path": "bjXRF/raw/ch1.txt", "type": "file", "sha": "a1", "size": 10},
            {"name": "old", "path": "bjXRF/raw/old", "type": "dir"}
        ]"#;

        let entries: Vec<ContentEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].kind, EntryKind::Dir);
        assert_eq!(entries[1].sha, None);
    }

    #[test]
    fn test_dispatch_request_body() {
        let mut inputs = BTreeMap::new();
        inputs.insert("force".to_string(), "true".to_string());
        let request = DispatchRequest {
            git_ref: "main".to_string(),
            inputs,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"ref": "main", "inputs": {"force": "true"}})
        );
    }
}
