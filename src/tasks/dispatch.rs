// Workflow dispatch.
// Starts the scraper or translator workflow with string-typed inputs.

use std::collections::BTreeMap;

use crate::config::SessionConfig;
use crate::error::{QuireError, Result};
use crate::github::{ActionsApi, DispatchRequest};

/// Branch every workflow is dispatched on.
pub const DISPATCH_REF: &str = "main";

/// The two workflows the panel can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Scraper,
    Translator,
}

impl Workflow {
    pub fn file_name(&self) -> &'static str {
        match self {
            Workflow::Scraper => "scraper.yml",
            Workflow::Translator => "translator.yml",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Workflow::Scraper => "scraper",
            Workflow::Translator => "translator",
        }
    }

    /// Description shown when GitHub rejects the dispatch.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Workflow::Scraper => "Failed to trigger scraper",
            Workflow::Translator => "Failed to trigger translator",
        }
    }

    pub fn success_notice(&self) -> &'static str {
        match self {
            Workflow::Scraper => "Scraper workflow triggered!",
            Workflow::Translator => "Translator workflow triggered!",
        }
    }

    pub fn error_notice(&self, error: &QuireError) -> String {
        match error {
            QuireError::MissingConfig => error.to_string(),
            _ => format!("Error triggering {}: {}", self.label(), error),
        }
    }
}

/// Inputs for the scraper workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScraperInputs {
    /// HTML listing the chapter links to scrape.
    pub html_content: String,
    pub source_url: String,
    pub base_dir: String,
}

/// Inputs for the translator workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorInputs {
    pub batch_size: String,
    /// Re-translate chapters that already have output.
    pub force: bool,
    pub base_dir: String,
}

/// A ready-to-send dispatch: which workflow and its named inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowDispatch {
    pub workflow: Workflow,
    pub inputs: BTreeMap<String, String>,
}

impl From<ScraperInputs> for WorkflowDispatch {
    fn from(inputs: ScraperInputs) -> Self {
        let inputs = BTreeMap::from([
            ("html_content".to_string(), inputs.html_content),
            ("book_source_url".to_string(), inputs.source_url),
            ("book_base_dir".to_string(), inputs.base_dir),
        ]);
        Self {
            workflow: Workflow::Scraper,
            inputs,
        }
    }
}

impl From<TranslatorInputs> for WorkflowDispatch {
    fn from(inputs: TranslatorInputs) -> Self {
        let inputs = BTreeMap::from([
            ("batch_size".to_string(), inputs.batch_size),
            ("force".to_string(), inputs.force.to_string()),
            ("book_base_dir".to_string(), inputs.base_dir),
        ]);
        Self {
            workflow: Workflow::Translator,
            inputs,
        }
    }
}

impl WorkflowDispatch {
    pub fn request(&self) -> DispatchRequest {
        DispatchRequest {
            git_ref: DISPATCH_REF.to_string(),
            inputs: self.inputs.clone(),
        }
    }
}

/// Send the dispatch. Fails fast without a network call when unconfigured.
pub async fn dispatch<A: ActionsApi>(
    api: &A,
    config: &SessionConfig,
    dispatch: &WorkflowDispatch,
) -> Result<()> {
    config.require_configured()?;

    let workflow = dispatch.workflow;
    tracing::info!(workflow = workflow.file_name(), "dispatching workflow");
    api.dispatch_workflow(
        config,
        workflow.file_name(),
        &dispatch.request(),
        workflow.failure_message(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{FakeApi, configured};

    #[test]
    fn test_translator_force_is_stringified() {
        let dispatch = WorkflowDispatch::from(TranslatorInputs {
            batch_size: "10".to_string(),
            force: true,
            base_dir: "bjXRF".to_string(),
        });

        assert_eq!(dispatch.workflow, Workflow::Translator);
        assert_eq!(dispatch.inputs["batch_size"], "10");
        assert_eq!(dispatch.inputs["force"], "true");
        assert_eq!(dispatch.inputs["book_base_dir"], "bjXRF");

        let not_forced = WorkflowDispatch::from(TranslatorInputs::default());
        assert_eq!(not_forced.inputs["force"], "false");
    }

    #[test]
    fn test_scraper_input_names() {
        let dispatch = WorkflowDispatch::from(ScraperInputs {
            html_content: "<a href=\"/1.html\">1</a>".to_string(),
            source_url: "https://www.52shuku.net".to_string(),
            base_dir: "bjXRF".to_string(),
        });

        let request = dispatch.request();
        assert_eq!(request.git_ref, "main");
        let keys: Vec<&str> = request.inputs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["book_base_dir", "book_source_url", "html_content"]);
    }

    #[tokio::test]
    async fn test_dispatch_sends_to_workflow_file() {
        let api = FakeApi::default();
        let dispatch_req = WorkflowDispatch::from(ScraperInputs::default());

        dispatch(&api, &configured(), &dispatch_req).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls, ["dispatch scraper.yml"]);
    }

    #[tokio::test]
    async fn test_dispatch_without_config_makes_no_call() {
        let api = FakeApi::default();
        let mut config = configured();
        config.token.clear();

        let result = dispatch(&api, &config, &WorkflowDispatch::from(ScraperInputs::default())).await;

        assert!(matches!(result, Err(QuireError::MissingConfig)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_rejection_reports_static_message() {
        let api = FakeApi {
            reject: true,
            ..FakeApi::default()
        };
        let workflow = Workflow::Translator;

        let err = dispatch(&api, &configured(), &WorkflowDispatch::from(TranslatorInputs::default()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to trigger translator");
        assert_eq!(
            workflow.error_notice(&err),
            "Error triggering translator: Failed to trigger translator"
        );
    }

    #[test]
    fn test_missing_config_notice_has_no_prefix() {
        assert_eq!(
            Workflow::Scraper.error_notice(&QuireError::MissingConfig),
            "Please configure GitHub settings first."
        );
    }
}
