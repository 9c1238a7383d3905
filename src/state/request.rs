// Request sequencing for overlapping fetches.

/// Monotonic request ids for one operation.
/// Only the response to the most recently issued request is applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    issued: u64,
    settled: u64,
}

impl RequestSeq {
    /// Issue the next request id.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Settle a response. Returns false for a stale id, whose result must be dropped.
    pub fn settle(&mut self, request: u64) -> bool {
        if request == self.issued {
            self.settled = request;
            true
        } else {
            false
        }
    }

    /// Whether the latest request is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.settled != self.issued
    }
}
