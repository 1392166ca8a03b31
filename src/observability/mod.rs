//! File-based logging built on `tracing`.
//!
//! Terminal applications cannot log to stdout without corrupting the UI, so
//! all diagnostics go to a rotating file in the user's data directory:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → LogWriter → unisono.log
//! ```
//!
//! The log file rotates at 10MB with 3 timestamped backups. The filter level
//! is taken from `RUST_LOG` when set, otherwise from the `trace_level`
//! config option, defaulting to `"info"`.

mod file_writer;
mod init;

pub use file_writer::LogWriter;
pub use init::init_tracing;
