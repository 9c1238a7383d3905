// In-memory GitHub double for task tests.

use std::sync::Mutex;

use reqwest::StatusCode;

use crate::config::SessionConfig;
use crate::error::{QuireError, Result};
use crate::github::endpoints::{LIST_FOLDER_FAILURE, LOAD_FILE_FAILURE, RECENT_RUNS_FAILURE};
use crate::github::{
    ActionsApi, ContentEntry, DispatchRequest, EntryKind, FileContent, WorkflowRun,
};

/// Records each call as a short string and answers from its fields.
#[derive(Debug, Default)]
pub struct FakeApi {
    /// Answer every call with a non-success status.
    pub reject: bool,
    pub runs: Vec<WorkflowRun>,
    pub entries: Vec<ContentEntry>,
    pub file_base64: Option<String>,
    /// Answer file loads the way GitHub does for blobs over 1 MB.
    pub oversized: bool,
    pub log: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.log.lock().unwrap().push(call);
    }

    fn outcome<T>(&self, value: T, failure: &'static str) -> Result<T> {
        if self.reject {
            Err(QuireError::Remote {
                message: failure,
                status: StatusCode::NOT_FOUND,
            })
        } else {
            Ok(value)
        }
    }
}

impl ActionsApi for FakeApi {
    async fn dispatch_workflow(
        &self,
        _config: &SessionConfig,
        workflow_file: &str,
        _request: &DispatchRequest,
        failure: &'static str,
    ) -> Result<()> {
        self.record(format!("dispatch {}", workflow_file));
        self.outcome((), failure)
    }

    async fn recent_runs(&self, _config: &SessionConfig, per_page: u32) -> Result<Vec<WorkflowRun>> {
        self.record(format!("runs per_page={}", per_page));
        self.outcome(self.runs.clone(), RECENT_RUNS_FAILURE)
    }

    async fn list_contents(&self, _config: &SessionConfig, path: &str) -> Result<Vec<ContentEntry>> {
        self.record(format!("list {}", path));
        self.outcome(self.entries.clone(), LIST_FOLDER_FAILURE)
    }

    async fn file_content(&self, _config: &SessionConfig, path: &str) -> Result<FileContent> {
        self.record(format!("file {}", path));
        let (content, encoding) = if self.oversized {
            (String::new(), "none")
        } else {
            (self.file_base64.clone().unwrap_or_default(), "base64")
        };
        let file = FileContent {
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            path: path.to_string(),
            sha: Some("fake-sha".to_string()),
            content,
            encoding: Some(encoding.to_string()),
        };
        self.outcome(file, LOAD_FILE_FAILURE)
    }
}

pub fn configured() -> SessionConfig {
    SessionConfig {
        token: "ghp_test".to_string(),
        owner: "octocat".to_string(),
        repo: "novels".to_string(),
        source_url: "https://www.52shuku.net".to_string(),
        base_dir: "bjXRF".to_string(),
    }
}

pub fn run(name: &str, run_number: u64, status: &str, conclusion: Option<&str>) -> WorkflowRun {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "run_number": run_number,
        "status": status,
        "conclusion": conclusion,
    }))
    .unwrap()
}

pub fn entry(name: &str, path: &str, kind: EntryKind) -> ContentEntry {
    ContentEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind,
        sha: None,
        size: None,
    }
}
