//! Transient success banner.
//!
//! No timer is spawned: the banner records when it was shown and answers
//! visibility queries against a clock reading.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessBanner {
    message: &'static str,
    ttl: Duration,
    shown_at: Option<DateTime<Utc>>,
}

impl SuccessBanner {
    pub fn new(message: &'static str, ttl: Duration) -> Self {
        Self {
            message,
            ttl,
            shown_at: None,
        }
    }

    pub fn show(&mut self, now: DateTime<Utc>) {
        self.shown_at = Some(now);
    }

    pub fn hide(&mut self) {
        self.shown_at = None;
    }

    /// Visible from `show` until `ttl` has elapsed.
    #[must_use]
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.shown_at
            .is_some_and(|shown| now >= shown && now - shown < self.ttl)
    }

    /// Forget an expired banner.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.shown_at.is_some() && !self.is_visible(now) {
            self.shown_at = None;
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    #[must_use]
    pub fn shown_at(&self) -> Option<DateTime<Utc>> {
        self.shown_at
    }
}
