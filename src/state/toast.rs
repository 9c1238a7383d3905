// Transient notification banner.

use std::time::{Duration, Instant};

/// How long a notice stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let start = Instant::now();
        let toast = Toast::new("Scraper workflow triggered!", start);

        assert!(!toast.is_expired(start));
        assert!(!toast.is_expired(start + Duration::from_millis(2999)));
        assert!(toast.is_expired(start + TOAST_DURATION));
    }
}
