// Workflow status panel state.

use crate::render::StatusLine;

use super::request::RequestSeq;

#[derive(Debug, Default)]
pub struct StatusPanel {
    /// Rendered runs from the latest applied refresh. `None` before the first one.
    pub lines: Option<Vec<StatusLine>>,
    pub seq: RequestSeq,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every displayed line.
    pub fn show(&mut self, lines: Vec<StatusLine>) {
        self.lines = Some(lines);
    }

    pub fn is_refreshing(&self) -> bool {
        self.seq.is_pending()
    }
}
