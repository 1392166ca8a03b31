//! Application state container, reducer, and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the search
//! box. It holds the store-owned fields (search status, connectivity,
//! providers, history, selection, focus) alongside the controller-local input
//! text and the debounce slot, and exposes methods for applying dispatched
//! commands and deriving the renderable view model.
//!
//! # Architecture
//!
//! State changes follow a unidirectional flow: the event handler mutates
//! controller-local fields directly (input text, debounce) and emits
//! [`Command`]s for everything store-owned; the runtime feeds each command
//! back through [`AppState::apply`], the reducer. View models are computed
//! on demand from state snapshots and never cached.
//!
//! # State Components
//!
//! - **Store fields**: in-flight search flag, connectivity, provider list,
//!   search history, selected provider, dropdown focus
//! - **Controller-local**: the input string (owned exclusively here, reset
//!   only by explicit action or drop) and the pending debounce slot
//! - **Presentation**: theme and locale, stored for view model computation

use crate::app::commands::Command;
use crate::app::debounce::DebounceSlot;
use crate::domain::{provider, HistoryEntry, Provider, ProviderOption};
use crate::i18n::Locale;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DropdownLabels, HistoryItem, SearchBoxViewModel};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Maximum number of entries retained in the search history.
const MAX_HISTORY_ENTRIES: usize = 10;

/// Central application state container.
///
/// Holds store-owned search state plus the controller-local input text.
/// Mutated by the event handler (local fields) and by [`AppState::apply`]
/// (store fields) in response to dispatched commands.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether a unified search is currently in flight.
    ///
    /// Set by the reducer when a search is dispatched, cleared when the
    /// workflow reports completion. Mirrored as `loading` in the view model.
    pub search_started: bool,

    /// Whether the host has network connectivity.
    ///
    /// The widget renders disabled while offline and the handler ignores
    /// input events.
    pub connected: bool,

    /// Known search providers, loaded by the host application.
    ///
    /// Read-only here; an empty list yields an empty option list.
    pub providers: Vec<Provider>,

    /// Past queries, newest first.
    ///
    /// Owned by the state; the controller can only request replacement via
    /// `ReplaceSearchHistory`. New entries arrive through the reducer when a
    /// search is dispatched.
    pub search_history: Vec<HistoryEntry>,

    /// Raw `source_name` of the currently selected provider, if any.
    pub selected_provider: Option<String>,

    /// Whether the search dropdown is visible.
    ///
    /// Toggled via `SetDropdownVisibility`, read back to drive the widget.
    pub dropdown_focused: bool,

    /// Current input text.
    ///
    /// Owned exclusively by the controller. Accumulated by `Char` events,
    /// reduced by `Backspace`.
    pub input: String,

    /// Pending debounced search, if any.
    ///
    /// Owned by the state so no scheduled task outlives it.
    pub debounce: DebounceSlot,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Translation bundle for widget labels.
    pub locale: Locale,
}

impl AppState {
    /// Creates a new application state with the given presentation settings.
    ///
    /// Connectivity is assumed until the host reports otherwise. Nothing is
    /// selected, and the input and history start empty.
    #[must_use]
    pub fn new(theme: Theme, locale: Locale) -> Self {
        Self {
            search_started: false,
            connected: true,
            providers: vec![],
            search_history: vec![],
            selected_provider: None,
            dropdown_focused: false,
            input: String::new(),
            debounce: DebounceSlot::default(),
            theme,
            locale,
        }
    }

    /// Applies a dispatched command to the store-owned fields.
    ///
    /// This is the reducer: every store mutation in the application funnels
    /// through here, keeping the mutation discipline in one place. `Shutdown`
    /// is a runtime concern and is ignored.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::SetDropdownVisibility(focused) => {
                tracing::debug!(focused = focused, "dropdown visibility changed");
                self.dropdown_focused = *focused;
            }
            Command::StartUnifiedSearch { query, context } => {
                tracing::debug!(query = %query, route = %context.route, "unified search dispatched");
                self.search_started = true;
                self.record_search(query);
            }
            Command::ReplaceSearchHistory(entries) => {
                tracing::debug!(entry_count = entries.len(), "search history replaced");
                self.search_history.clone_from(entries);
            }
            Command::SelectProvider(source_name) => {
                tracing::debug!(provider = %source_name, "provider selected");
                self.selected_provider = Some(source_name.clone());
            }
            Command::Shutdown => {}
        }
    }

    /// Records a query at the head of the search history.
    ///
    /// An earlier entry with the same query text is removed first, and the
    /// list is capped at [`MAX_HISTORY_ENTRIES`].
    fn record_search(&mut self, query: &str) {
        self.search_history.retain(|entry| entry.query != query);
        self.search_history.insert(0, HistoryEntry::new(query));
        self.search_history.truncate(MAX_HISTORY_ENTRIES);
    }

    /// Projects every known provider into its dropdown option.
    ///
    /// Computed fresh on each call; empty when no providers are loaded.
    #[must_use]
    pub fn provider_options(&self) -> Vec<ProviderOption> {
        self.providers.iter().map(Provider::to_option).collect()
    }

    /// Resolves the option for the currently selected provider.
    ///
    /// Case-sensitive match on the raw `source_name`; `None` when nothing
    /// matches.
    #[must_use]
    pub fn selected_provider_option(&self) -> Option<ProviderOption> {
        provider::selected_option(&self.providers, self.selected_provider.as_deref())
    }

    /// Computes the history rows shown in the dropdown.
    ///
    /// With empty input every entry is listed. Otherwise entries are filtered
    /// with the fuzzy matcher against the current input and annotated with
    /// highlight ranges for the matched characters.
    #[must_use]
    pub fn history_suggestions(&self) -> Vec<HistoryItem> {
        let matcher = if self.input.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        self.search_history
            .iter()
            .filter_map(|entry| {
                let highlight_ranges = match matcher.as_ref() {
                    None => vec![],
                    Some(m) => {
                        m.fuzzy_match(&entry.query, &self.input)?;
                        Self::highlight_ranges(&entry.query, &self.input, m)
                    }
                };
                Some(HistoryItem {
                    query: entry.query.clone(),
                    age: entry.time_ago(),
                    highlight_ranges,
                })
            })
            .collect()
    }

    /// Computes character index ranges to highlight for fuzzy match visualization.
    ///
    /// Uses the Skim fuzzy matcher to find matching character positions, then
    /// coalesces consecutive indices into `(start, end)` ranges (exclusive end)
    /// for efficient highlighting.
    fn highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
            return vec![];
        };

        let mut ranges = Vec::new();
        let mut start = None;
        let mut prev = None;

        for &idx in &indices {
            match (start, prev) {
                (None, _) => {
                    start = Some(idx);
                    prev = Some(idx);
                }
                (Some(_), Some(p)) if idx == p + 1 => {
                    prev = Some(idx);
                }
                (Some(s), Some(p)) => {
                    ranges.push((s, p + 1));
                    start = Some(idx);
                    prev = Some(idx);
                }
                _ => {}
            }
        }

        if let (Some(s), Some(p)) = (start, prev) {
            ranges.push((s, p + 1));
        }

        ranges
    }

    /// Computes the renderable view model from the current state.
    ///
    /// Derivation happens fresh on every call, never cached: provider options
    /// and the selected option are recomputed from the provider list, labels
    /// come from the locale, and `loading`/`disabled` mirror the store flags.
    #[must_use]
    pub fn compute_viewmodel(&self) -> SearchBoxViewModel {
        SearchBoxViewModel {
            input: self.input.clone(),
            placeholder: self.locale.search.placeholder.clone(),
            loading: self.search_started,
            disabled: !self.connected,
            focused: self.dropdown_focused,
            provider_options: self.provider_options(),
            selected_provider: self.selected_provider_option(),
            history: self.history_suggestions(),
            labels: DropdownLabels {
                last_searches: self.locale.search.last_searches.clone(),
                clear_history: self.locale.search.clear_history.clone(),
                footer: self.locale.search.you_can_search_for.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::NavigationContext;

    fn state() -> AppState {
        AppState::new(Theme::default(), Locale::default())
    }

    #[test]
    fn reducer_applies_store_commands() {
        let mut state = state();

        state.apply(&Command::SetDropdownVisibility(true));
        assert!(state.dropdown_focused);

        state.apply(&Command::SelectProvider("Discogs".to_string()));
        assert_eq!(state.selected_provider.as_deref(), Some("Discogs"));

        state.apply(&Command::StartUnifiedSearch {
            query: "boards of canada".to_string(),
            context: NavigationContext::search_results(),
        });
        assert!(state.search_started);
        assert_eq!(state.search_history[0].query, "boards of canada");

        state.apply(&Command::ReplaceSearchHistory(vec![]));
        assert!(state.search_history.is_empty());
    }

    #[test]
    fn history_dedupes_and_caps() {
        let mut state = state();

        for i in 0..15 {
            state.apply(&Command::StartUnifiedSearch {
                query: format!("query {i}"),
                context: NavigationContext::search_results(),
            });
        }
        assert_eq!(state.search_history.len(), 10);
        assert_eq!(state.search_history[0].query, "query 14");

        // Re-searching an existing query moves it to the head without growing
        // the list.
        state.apply(&Command::StartUnifiedSearch {
            query: "query 7".to_string(),
            context: NavigationContext::search_results(),
        });
        assert_eq!(state.search_history.len(), 10);
        assert_eq!(state.search_history[0].query, "query 7");
        let sevens = state
            .search_history
            .iter()
            .filter(|e| e.query == "query 7")
            .count();
        assert_eq!(sevens, 1);
    }

    #[test]
    fn viewmodel_mirrors_store_flags() {
        let mut state = state();
        state.providers = vec![Provider::new("Spotify", "Spotify")];
        state.selected_provider = Some("Spotify".to_string());
        state.search_started = true;
        state.connected = false;

        let vm = state.compute_viewmodel();
        assert!(vm.loading);
        assert!(vm.disabled);
        assert_eq!(vm.provider_options.len(), 1);
        assert_eq!(vm.selected_provider.unwrap().key, "spotify");
    }

    #[test]
    fn viewmodel_empty_without_providers() {
        let state = state();
        let vm = state.compute_viewmodel();
        assert!(vm.provider_options.is_empty());
        assert!(vm.selected_provider.is_none());
    }

    #[test]
    fn suggestions_filter_by_fuzzy_match() {
        let mut state = state();
        state.search_history = vec![
            HistoryEntry::new("daft punk"),
            HistoryEntry::new("burial"),
        ];

        // Empty input lists everything, unhighlighted.
        let all = state.history_suggestions();
        assert_eq!(all.len(), 2);
        assert!(all[0].highlight_ranges.is_empty());

        state.input = "daft".to_string();
        let filtered = state.history_suggestions();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].query, "daft punk");
        assert!(!filtered[0].highlight_ranges.is_empty());
    }
}
