//! Background thread executing unified searches.
//!
//! This module runs search requests off the main loop so typing and rendering
//! never block on provider queries. The actual engine sits behind the
//! [`UnifiedSearch`] trait; this crate only ships a logging stub, since
//! search semantics (ranking, network protocols) belong to the host
//! application.

use crate::domain::error::Result;
use crate::workflow::{WorkflowRequest, WorkflowResponse};
use std::sync::mpsc;
use std::thread;

/// The seam where a real search engine plugs in.
///
/// Implementations query the selected provider (or all providers when `None`)
/// and return the number of results. Failures are reported back through the
/// workflow's response channel, not through the controller.
pub trait UnifiedSearch: Send {
    /// Runs a unified search, returning the result count.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying engine fails; the workflow maps
    /// it to a [`WorkflowResponse::Error`].
    fn search(&self, query: &str, provider: Option<&str>) -> Result<usize>;
}

/// Engine stub that logs requests and reports zero results.
///
/// Installed by the standalone binary, where no real metadata backend is
/// wired up.
#[derive(Debug, Default)]
pub struct LoggingSearch;

impl UnifiedSearch for LoggingSearch {
    fn search(&self, query: &str, provider: Option<&str>) -> Result<usize> {
        tracing::info!(query = %query, provider = ?provider, "unified search requested");
        Ok(0)
    }
}

/// Workflow state processing requests against the configured engine.
pub struct SearchWorkflow {
    engine: Box<dyn UnifiedSearch>,
}

impl SearchWorkflow {
    /// Creates a workflow around the given engine.
    #[must_use]
    pub fn new(engine: Box<dyn UnifiedSearch>) -> Self {
        Self { engine }
    }

    /// Processes a single request and returns the appropriate response.
    ///
    /// Engine failures are mapped to [`WorkflowResponse::Error`] with a
    /// message; they never propagate as panics or controller errors.
    pub fn handle_request(&self, request: WorkflowRequest) -> WorkflowResponse {
        let _span = tracing::debug_span!("workflow_handle_request", request_type = ?request).entered();

        match request {
            WorkflowRequest::StartSearch {
                query,
                provider,
                route,
            } => match self.engine.search(&query, provider.as_deref()) {
                Ok(result_count) => {
                    tracing::debug!(
                        query = %query,
                        result_count = result_count,
                        route = %route,
                        "search completed"
                    );
                    WorkflowResponse::SearchCompleted {
                        query,
                        result_count,
                    }
                }
                Err(e) => {
                    tracing::debug!(query = %query, error = %e, "search failed");
                    WorkflowResponse::Error {
                        message: format!("unified search: {e}"),
                    }
                }
            },
        }
    }
}

/// Spawns the workflow thread and returns its request/response channels.
///
/// Requests and responses are JSON-serialized [`WorkflowRequest`] and
/// [`WorkflowResponse`] payloads. The thread exits when the request sender is
/// dropped or the response receiver goes away. Malformed request payloads are
/// logged and skipped.
pub fn spawn(engine: Box<dyn UnifiedSearch>) -> (mpsc::Sender<String>, mpsc::Receiver<String>) {
    let (request_tx, request_rx) = mpsc::channel::<String>();
    let (response_tx, response_rx) = mpsc::channel::<String>();

    thread::spawn(move || {
        let workflow = SearchWorkflow::new(engine);

        while let Ok(payload) = request_rx.recv() {
            let request: WorkflowRequest = match serde_json::from_str(&payload) {
                Ok(request) => request,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize workflow request");
                    continue;
                }
            };

            let response = workflow.handle_request(request);

            match serde_json::to_string(&response) {
                Ok(payload) => {
                    if response_tx.send(payload).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to serialize workflow response");
                }
            }
        }
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UnisonoError;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records every search it receives and reports a fixed result count.
    struct RecordingSearch {
        calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
    }

    impl UnifiedSearch for RecordingSearch {
        fn search(&self, query: &str, provider: Option<&str>) -> crate::domain::Result<usize> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), provider.map(String::from)));
            Ok(3)
        }
    }

    struct FailingSearch;

    impl UnifiedSearch for FailingSearch {
        fn search(&self, _query: &str, _provider: Option<&str>) -> crate::domain::Result<usize> {
            Err(UnisonoError::Workflow("provider timeout".to_string()))
        }
    }

    #[test]
    fn completed_search_reports_query_and_count() {
        let calls = Arc::new(Mutex::new(vec![]));
        let workflow = SearchWorkflow::new(Box::new(RecordingSearch {
            calls: Arc::clone(&calls),
        }));

        let response = workflow.handle_request(WorkflowRequest::start_search(
            "daft punk",
            Some("Discogs".to_string()),
            "/search",
        ));

        assert_eq!(
            response,
            WorkflowResponse::SearchCompleted {
                query: "daft punk".to_string(),
                result_count: 3,
            }
        );
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            &[("daft punk".to_string(), Some("Discogs".to_string()))]
        );
    }

    #[test]
    fn engine_failure_becomes_error_response() {
        let workflow = SearchWorkflow::new(Box::new(FailingSearch));
        let response =
            workflow.handle_request(WorkflowRequest::start_search("burial", None, "/search"));

        match response {
            WorkflowResponse::Error { message } => {
                assert!(message.contains("provider timeout"));
            }
            other => panic!("expected error response, got {other:?}"),
        }
    }

    #[test]
    fn spawned_thread_round_trips_json_payloads() {
        let calls = Arc::new(Mutex::new(vec![]));
        let (request_tx, response_rx) = spawn(Box::new(RecordingSearch {
            calls: Arc::clone(&calls),
        }));

        let request = WorkflowRequest::start_search("aphex twin", None, "/search");
        request_tx
            .send(serde_json::to_string(&request).unwrap())
            .unwrap();

        let payload = response_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("workflow thread should respond");
        let response: WorkflowResponse = serde_json::from_str(&payload).unwrap();

        assert_eq!(
            response,
            WorkflowResponse::SearchCompleted {
                query: "aphex twin".to_string(),
                result_count: 3,
            }
        );
    }
}
