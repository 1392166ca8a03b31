//! Background search workflow and its message protocol.
//!
//! The unified search itself is an external concern: this layer only carries
//! requests to a background thread, runs them against a pluggable engine, and
//! ships results back as responses. The controller never waits on it.
//!
//! # Modules
//!
//! - [`messages`]: JSON request/response protocol types
//! - [`handler`]: Workflow thread, engine trait, and the logging stub

pub mod handler;
pub mod messages;

pub use handler::{spawn, LoggingSearch, SearchWorkflow, UnifiedSearch};
pub use messages::{WorkflowRequest, WorkflowResponse};
