//! Core domain types shared across the application.
//!
//! This module defines the provider descriptors, search history entries, and
//! the centralized error type. Domain types carry no UI or dispatch concerns;
//! they are plain values consumed by the application and workflow layers.

pub mod error;
pub mod history;
pub mod provider;

pub use error::{Result, UnisonoError};
pub use history::HistoryEntry;
pub use provider::{Provider, ProviderOption};
