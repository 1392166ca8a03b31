//! Application layer coordinating state, events, and commands.
//!
//! This module defines the core controller logic, sitting between the terminal
//! runtime (main.rs) and the domain/workflow layers. It implements the
//! event-driven architecture that powers the search box.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Commands → Reducer → State → Render
//!                           ↑                         ↓
//!                           └── Workflow Responses ───┘
//! ```
//!
//! # Modules
//!
//! - [`commands`]: Dispatched commands and the navigation context
//! - [`debounce`]: Single-slot delayed-task scheduler for debounced search
//! - [`handler`]: Event processing logic and command emission
//! - [`state`]: Central state container, reducer, and view model computation

pub mod commands;
pub mod debounce;
pub mod handler;
pub mod state;

pub use commands::{Command, NavigationContext};
pub use debounce::DebounceSlot;
pub use handler::{handle_event, Event, MIN_SEARCH_LENGTH};
pub use state::AppState;
