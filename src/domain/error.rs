//! Error types for unisono.
//!
//! This module defines the centralized error type [`UnisonoError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for unisono operations.
///
/// This enum consolidates all error conditions that can occur while running the
/// search box, from locale and theme loading to workflow communication failures.
/// Note that failures *inside* a dispatched search workflow are deliberately not
/// represented here: the workflow reports them through its own response channel
/// and the controller never observes them as errors.
#[derive(Debug, Error)]
pub enum UnisonoError {
    /// Locale bundle parsing failed.
    ///
    /// Occurs when a translation bundle's TOML cannot be parsed. Missing
    /// individual keys do not raise this error; they fall back silently.
    #[error("Locale error: {0}")]
    Locale(String),

    /// Theme parsing failed.
    ///
    /// Occurs when a theme file's TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the search workflow thread failed.
    ///
    /// Occurs when a request cannot be serialized or the workflow channel is
    /// disconnected. The string contains details about the failure.
    #[error("Workflow communication error: {0}")]
    Workflow(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for unisono operations.
///
/// This is a type alias for `std::result::Result<T, UnisonoError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, UnisonoError>;
