//! View model types representing renderable UI state.
//!
//! This module defines the immutable configuration the search box widget
//! renders from. The view model is computed fresh from application state on
//! every render and contains no business logic, only display-ready data:
//! labels already localized, provider options already projected, history
//! rows already filtered and annotated with highlight ranges.

use crate::domain::ProviderOption;

/// Complete widget configuration for one render.
///
/// Mirrors the store: `loading` reflects an in-flight unified search,
/// `disabled` reflects lost connectivity, and `focused` decides whether the
/// dropdown is drawn.
#[derive(Debug, Clone)]
pub struct SearchBoxViewModel {
    /// Current input text.
    pub input: String,

    /// Placeholder shown while the input is empty.
    pub placeholder: String,

    /// Whether a unified search is in flight.
    pub loading: bool,

    /// Whether the widget is disabled (no connectivity).
    pub disabled: bool,

    /// Whether the dropdown is visible.
    pub focused: bool,

    /// Options for every known provider; empty when none are loaded.
    pub provider_options: Vec<ProviderOption>,

    /// Option for the currently selected provider, if any matches.
    pub selected_provider: Option<ProviderOption>,

    /// History rows to show in the dropdown, newest first.
    pub history: Vec<HistoryItem>,

    /// Localized dropdown labels.
    pub labels: DropdownLabels,
}

/// One row in the "last searches" list.
#[derive(Debug, Clone)]
pub struct HistoryItem {
    /// The past query text.
    pub query: String,

    /// Relative age string (e.g., "5m ago").
    pub age: String,

    /// Character ranges of `query` matching the current input.
    ///
    /// Each tuple is `(start, end)` with exclusive end. Empty when the input
    /// is empty.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Localized labels rendered inside the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownLabels {
    /// Heading above the history list.
    pub last_searches: String,

    /// Label for the clear-history action.
    pub clear_history: String,

    /// Hint rendered at the bottom of the dropdown.
    pub footer: String,
}
