//! Message types for communication with the search workflow thread.
//!
//! This module defines the request and response protocol between the main
//! thread and the background thread that executes unified searches. Messages
//! travel as JSON strings over plain channels, keeping the boundary explicit:
//! the controller fires requests and forgets them, and results come back as
//! ordinary events.

use serde::{Deserialize, Serialize};

/// Requests sent from the main thread to the workflow thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowRequest {
    /// Run a unified search across the connected providers.
    StartSearch {
        /// Query text to search for.
        query: String,

        /// Raw `source_name` of the selected provider, if any. With no
        /// selection the engine queries all providers.
        provider: Option<String>,

        /// Route the host should display once results are available.
        route: String,
    },
}

impl WorkflowRequest {
    /// Creates a search request for the given query and provider selection.
    #[must_use]
    pub fn start_search(query: impl Into<String>, provider: Option<String>, route: impl Into<String>) -> Self {
        Self::StartSearch {
            query: query.into(),
            provider,
            route: route.into(),
        }
    }
}

/// Responses sent from the workflow thread back to the main thread.
///
/// Either completion with a result count or an error message. Errors are the
/// workflow's own reporting; the controller treats both the same way (stop
/// the loading indicator) and never turns them into controller errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowResponse {
    /// A unified search finished.
    SearchCompleted {
        /// The query that was searched.
        query: String,

        /// Number of results the engine produced.
        result_count: usize,
    },

    /// The search workflow failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
