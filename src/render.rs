// View model for fetched GitHub data.
// Pure functions from API types to what the panels display.

use chrono::{DateTime, Utc};

use crate::github::{ContentEntry, EntryKind, RunConclusion, WorkflowRun};

/// Placeholder shown while a run has no conclusion yet.
pub const RUNNING_PLACEHOLDER: &str = "running";

/// Visual tone of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Neutral,
    Pending,
}

/// One rendered workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Workflow name and run number, e.g. `Scraper #12`.
    pub title: String,
    /// Status and conclusion, e.g. `completed: success`.
    pub state: String,
    pub tone: Tone,
    pub created_at: Option<DateTime<Utc>>,
}

/// A selectable file in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub name: String,
    pub path: String,
}

fn tone_for(conclusion: Option<&RunConclusion>) -> Tone {
    match conclusion {
        Some(RunConclusion::Success) => Tone::Success,
        Some(
            RunConclusion::Failure | RunConclusion::TimedOut | RunConclusion::StartupFailure,
        ) => Tone::Failure,
        Some(_) => Tone::Neutral,
        None => Tone::Pending,
    }
}

pub fn status_line(run: &WorkflowRun) -> StatusLine {
    let name = run.name.as_deref().unwrap_or("(unnamed)");
    let conclusion = run
        .conclusion
        .as_ref()
        .map(RunConclusion::as_str)
        .unwrap_or(RUNNING_PLACEHOLDER);

    StatusLine {
        title: format!("{} #{}", name, run.run_number),
        state: format!("{}: {}", run.status, conclusion),
        tone: tone_for(run.conclusion.as_ref()),
        created_at: run.created_at,
    }
}

/// Render a full run list. Replaces whatever was shown before.
pub fn status_lines(runs: &[WorkflowRun]) -> Vec<StatusLine> {
    runs.iter().map(status_line).collect()
}

/// Keep only plain files; directories are skipped, not descended into.
pub fn file_items(entries: &[ContentEntry]) -> Vec<FileItem> {
    entries
        .iter()
        .filter(|entry| entry.kind == EntryKind::File)
        .map(|entry| FileItem {
            name: entry.name.clone(),
            path: entry.path.clone(),
        })
        .collect()
}

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::testing::{entry, run};

    #[test]
    fn test_completed_run_line() {
        let lines = status_lines(&[run("Scraper", 12, "completed", Some("success"))]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].title, "Scraper #12");
        assert_eq!(lines[0].state, "completed: success");
        assert_eq!(lines[0].tone, Tone::Success);
    }

    #[test]
    fn test_running_placeholder() {
        let line = status_line(&run("Translator", 3, "in_progress", None));
        assert_eq!(line.state, "in_progress: running");
        assert_eq!(line.tone, Tone::Pending);
    }

    #[test]
    fn test_failure_tones() {
        assert_eq!(
            status_line(&run("T", 1, "completed", Some("timed_out"))).tone,
            Tone::Failure
        );
        assert_eq!(
            status_line(&run("T", 1, "completed", Some("cancelled"))).tone,
            Tone::Neutral
        );
    }

    #[test]
    fn test_unrecognized_states_keep_wire_names() {
        let line = status_line(&run("Scraper", 4, "brand_new", Some("also_new")));
        assert_eq!(line.state, "brand_new: also_new");
        assert_eq!(line.tone, Tone::Neutral);
    }

    #[test]
    fn test_status_lines_replace_not_append() {
        let first = status_lines(&[
            run("Scraper", 1, "completed", Some("success")),
            run("Scraper", 2, "queued", None),
        ]);
        let second = status_lines(&[run("Translator", 9, "queued", None)]);

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].title, "Translator #9");
    }

    #[test]
    fn test_only_files_are_listed() {
        let entries = vec![
            entry("ch1.txt", "bjXRF/raw/ch1.txt", EntryKind::File),
            entry("archive", "bjXRF/raw/archive", EntryKind::Dir),
        ];

        let items = file_items(&entries);

        assert_eq!(
            items,
            vec![FileItem {
                name: "ch1.txt".to_string(),
                path: "bjXRF/raw/ch1.txt".to_string(),
            }]
        );
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(&now), "just now");
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::minutes(5))),
            "5m ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::hours(3))),
            "3h ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::days(2))),
            "2d ago"
        );
    }
}
