//! Commands dispatched by the event handler.
//!
//! This module defines the [`Command`] type, the fire-and-forget messages the
//! controller emits towards the store and the runtime. Commands bridge pure
//! event handling and effectful operations: store mutations are applied by the
//! reducer ([`AppState::apply`](crate::app::AppState::apply)), while
//! `StartUnifiedSearch` is additionally forwarded to the background search
//! workflow by the runtime.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Command>` after processing each event,
//! allowing multiple dispatches to be queued atomically. The runtime applies
//! each command to the state and executes any side effects in sequence. No
//! command carries a reply channel; results come back as ordinary events.

use crate::domain::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Navigation context attached to a unified search dispatch.
///
/// A plain value naming the route the host application should display once
/// results arrive; the workflow carries it along without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    /// Route to navigate to when the search workflow produces results.
    pub route: String,
}

impl NavigationContext {
    /// Context pointing at the search results view.
    #[must_use]
    pub fn search_results() -> Self {
        Self {
            route: "/search".to_string(),
        }
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::search_results()
    }
}

/// Commands emitted by the event handler.
///
/// The first four variants are the controller's dispatcher surface: they
/// mutate the store (via the reducer) or trigger the unified search workflow.
/// `Shutdown` is a runtime concern for the standalone binary and never touches
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shows or hides the search dropdown.
    ///
    /// Dispatched on focus changes and on Escape. The reducer stores the flag;
    /// the widget reads it back to decide whether to render the dropdown.
    SetDropdownVisibility(bool),

    /// Starts a unified search across the connected providers.
    ///
    /// Only ever dispatched for queries of at least the minimum search length.
    /// The reducer marks the search as in flight and records the query in the
    /// history; the runtime forwards the request to the workflow thread.
    StartUnifiedSearch {
        /// Query text to search for.
        query: String,
        /// Where the host should navigate once results are available.
        context: NavigationContext,
    },

    /// Replaces the entire search history.
    ///
    /// The controller only ever dispatches this with an empty sequence (the
    /// "clear history" interaction), but the reducer accepts any replacement.
    ReplaceSearchHistory(Vec<HistoryEntry>),

    /// Selects a search provider by its raw `source_name`.
    SelectProvider(String),

    /// Stops the application.
    ///
    /// Executed by the runtime only; the reducer ignores it.
    Shutdown,
}
