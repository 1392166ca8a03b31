//! Search history entries.
//!
//! This module defines the `HistoryEntry` type representing a past query in the
//! "last searches" dropdown. Entries carry a timestamp so the UI can render a
//! relative age next to each query. The history sequence itself is owned by the
//! application state; the controller can only request its replacement.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A past search query with the time it was submitted.
///
/// # Fields
///
/// - `query`: The query text as dispatched to the unified search workflow
/// - `searched_at`: Unix timestamp of the dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    pub searched_at: i64,
}

impl HistoryEntry {
    /// Creates a history entry for a query submitted now.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            searched_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Returns a human-readable string describing how long ago the search ran.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn time_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.searched_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}
