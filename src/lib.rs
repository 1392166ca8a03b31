//! Unisono: a terminal search box for unified music metadata search.
//!
//! Unisono renders an interactive search input that dispatches queries
//! across multiple metadata providers (Discogs, Musicbrainz, iTunes, ...)
//! through a single unified entry point. It provides:
//! - Debounced auto-search while typing, with a 500ms quiet period
//! - Immediate search on Enter, with a minimum query length guard
//! - A dropdown with fuzzy-filtered search history and provider selection
//! - Offline handling that disables the widget while connectivity is lost
//! - Background search execution on a worker thread
//!
//! # Architecture
//!
//! The crate follows a unidirectional data flow:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ events
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and command dispatch              │
//! │  - Reducer (AppState::apply)                        │
//! │  - Debounce slot                                    │
//! └─────────────────────────────────────────────────────┘
//!         │ view model           │ commands
//! ┌───────────────┐     ┌───────────────┐
//! │ UI Layer      │     │ Workflow      │
//! │ (ui/)         │     │ (workflow/)   │
//! │ - Rendering   │     │ - Search exec │
//! │ - Theming     │     │ - IPC bridge  │
//! └───────────────┘     └───────────────┘
//!         │                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Ambient Layers                            │
//! │  - Providers, history, errors (domain/)             │
//! │  - Translations (i18n/)                             │
//! │  - File-based logging (observability/)              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Events flow in one direction: the shim translates keystrokes into
//! [`Event`]s, [`handle_event`] mutates controller-local state and returns
//! [`Command`]s, the runtime feeds each command through the
//! [`AppState::apply`] reducer and forwards search commands to the workflow
//! thread, and the renderer draws from a freshly computed view model.
//!
//! # Example
//!
//! ```rust
//! use std::time::Instant;
//! use unisono::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (rerender, commands) = handle_event(&mut state, &Event::Char('a'), Instant::now())?;
//! for command in &commands {
//!     state.apply(command);
//! }
//! assert!(rerender);
//! # Ok::<(), unisono::UnisonoError>(())
//! ```

pub mod app;
pub mod domain;
pub mod i18n;
pub mod observability;
pub mod ui;
pub mod workflow;

pub use app::{handle_event, AppState, Command, Event, NavigationContext, MIN_SEARCH_LENGTH};
pub use domain::{HistoryEntry, Provider, ProviderOption, Result, UnisonoError};
pub use i18n::Locale;
pub use ui::Theme;

/// Application configuration, resolved from environment variables.
///
/// All settings are optional and fall back to sensible defaults, so the
/// binary runs unconfigured.
#[derive(Debug, Clone)]
pub struct Config {
    /// Translation bundle name.
    ///
    /// Built-in options: `en`, `de`. Ignored if `locale_file` is set.
    /// Default: `en`.
    pub locale: Option<String>,

    /// Path to a custom TOML translation file.
    ///
    /// Takes precedence over `locale`. See [`i18n`] for the format.
    pub locale_file: Option<String>,

    /// Built-in theme name.
    ///
    /// Options: `nocturne`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log filter level.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Overridden by
    /// `RUST_LOG` when set. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Debounce quiet period in milliseconds. Default: 500.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: None,
            locale_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            debounce_ms: app::debounce::DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl Config {
    /// Reads configuration from `UNISONO_*` environment variables.
    ///
    /// Recognized variables: `UNISONO_LOCALE`, `UNISONO_LOCALE_FILE`,
    /// `UNISONO_THEME`, `UNISONO_THEME_FILE`, `UNISONO_TRACE_LEVEL`,
    /// `UNISONO_DEBOUNCE_MS`. Unset or empty variables fall back to
    /// defaults; a malformed `UNISONO_DEBOUNCE_MS` falls back to 500.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            locale: var("UNISONO_LOCALE"),
            locale_file: var("UNISONO_LOCALE_FILE"),
            theme_name: var("UNISONO_THEME"),
            theme_file: var("UNISONO_THEME_FILE"),
            trace_level: var("UNISONO_TRACE_LEVEL"),
            debounce_ms: var("UNISONO_DEBOUNCE_MS")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.debounce_ms),
        }
    }
}

/// Initializes the application with configuration.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// the translation bundle the same way, logging and falling back to the
/// default on any load failure, then builds an [`AppState`] with the
/// configured debounce delay.
///
/// Does not install the tracing subscriber; call
/// [`observability::init_tracing`] first if file logging is wanted.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing unisono");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let locale = config.locale_file.as_ref().map_or_else(
        || {
            config.locale.as_ref().map_or_else(Locale::default, |name| {
                Locale::from_name(name).unwrap_or_else(|| {
                    tracing::debug!(locale = %name, "unknown locale, using english");
                    Locale::default()
                })
            })
        },
        |locale_file| {
            Locale::from_file(locale_file).unwrap_or_else(|e| {
                tracing::debug!(locale_file = %locale_file, error = %e, "failed to load locale file, using english");
                Locale::default()
            })
        },
    );

    let mut state = AppState::new(theme, locale);
    state.debounce = app::DebounceSlot::new(std::time::Duration::from_millis(config.debounce_ms));
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_initializes_with_builtins() {
        let state = initialize(&Config::default());
        assert_eq!(state.theme.name, "nocturne");
        assert_eq!(state.locale.name, "en");
        assert!(state.connected);
        assert!(!state.debounce.is_pending());
    }

    #[test]
    fn unknown_names_fall_back_to_defaults() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            locale: Some("xx".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.theme.name, "nocturne");
        assert_eq!(state.locale.name, "en");
    }
}
