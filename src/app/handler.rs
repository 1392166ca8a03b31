//! Event handling and command dispatch.
//!
//! This module implements the controller: it processes user input, system
//! events, and workflow responses, mutating controller-local state directly
//! and translating everything store-bound into dispatched [`Command`]s.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal runtime or the workflow thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Controller-local fields (input text, debounce slot) mutate in place
//! 4. Store mutations are emitted as commands and applied by the reducer
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Input**: `Char`, `Backspace`, `Enter`, `Escape`
//! - **Widget callbacks**: `FocusChange`, `SelectProvider`, `CycleProvider`,
//!   `ClearHistory`
//! - **Time**: `Tick` (drives the debounce slot)
//! - **Store-side**: `ConnectivityChanged`, `ProvidersLoaded`
//! - **Workflow**: `WorkflowResponse` with typed message variants
//!
//! # Search length guard
//!
//! Both the immediate path (Enter) and the debounced path use the same
//! `length >= MIN_SEARCH_LENGTH` guard, so no search command is ever
//! dispatched for input shorter than two characters.

use crate::app::commands::{Command, NavigationContext};
use crate::app::AppState;
use crate::domain::error::Result;
use crate::domain::Provider;
use crate::workflow::WorkflowResponse;
use std::time::Instant;

/// Minimum query length for a search to be dispatched, on either path.
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Events triggered by user input, system changes, or workflow responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and command dispatches. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the input text.
    Char(char),
    /// Removes the last character from the input text.
    Backspace,
    /// Submits the current input for an immediate search.
    Enter,
    /// Hides the dropdown, leaving the input text untouched.
    Escape,
    /// Shows or hides the dropdown (widget focus callback).
    FocusChange(bool),
    /// Selects a provider option, or nothing if the option is absent.
    SelectProvider(Option<String>),
    /// Advances the provider selection to the next known provider, wrapping.
    CycleProvider,
    /// Requests that the search history be cleared.
    ClearHistory,
    /// Periodic tick driving the debounce slot.
    Tick,

    /// Updates the connectivity flag.
    ///
    /// Going offline disables the widget and cancels any pending debounced
    /// search.
    ConnectivityChanged(bool),

    /// Replaces the list of known providers.
    ProvidersLoaded(Vec<Provider>),

    /// Wraps a response from the background search workflow.
    ///
    /// Completion and failure both clear the in-flight flag; failure details
    /// stay inside the workflow's own reporting and never become controller
    /// errors.
    WorkflowResponse(WorkflowResponse),

    /// Stops the application.
    Quit,
}

/// Processes an event, mutates application state, and returns commands to dispatch.
///
/// This is the controller entry point. It pattern-matches on event types,
/// mutates controller-local fields, and collects store-bound commands for the
/// runtime to apply and execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
/// * `now` - Current instant, used for debounce scheduling and polling
///
/// # Returns
///
/// A `(should_render, commands)` pair. `should_render` is `false` when the
/// event left nothing visible to update (e.g., input while disconnected).
///
/// # Errors
///
/// Currently infallible in practice; the `Result` return mirrors the rest of
/// the crate so future handlers can propagate failures.
pub fn handle_event(
    state: &mut AppState,
    event: &Event,
    now: Instant,
) -> Result<(bool, Vec<Command>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if !state.connected {
                tracing::debug!("offline, ignoring input");
                return Ok((false, vec![]));
            }

            state.input.push(*c);
            tracing::trace!(input = %state.input, char = %c, "input updated");

            let mut commands = vec![];
            if !state.dropdown_focused {
                commands.push(Command::SetDropdownVisibility(true));
            }

            reschedule_debounce(state, now);
            Ok((true, commands))
        }
        Event::Backspace => {
            if !state.connected {
                return Ok((false, vec![]));
            }

            if state.input.pop().is_none() {
                return Ok((false, vec![]));
            }

            reschedule_debounce(state, now);
            Ok((true, vec![]))
        }
        Event::Enter => {
            if !state.connected {
                tracing::debug!("offline, ignoring submit");
                return Ok((false, vec![]));
            }

            let commands = search_commands(state, &state.input.clone());
            Ok((!commands.is_empty(), commands))
        }
        Event::Escape => Ok((true, vec![Command::SetDropdownVisibility(false)])),
        Event::FocusChange(focused) => Ok((true, vec![Command::SetDropdownVisibility(*focused)])),
        Event::SelectProvider(option) => match option {
            Some(value) => Ok((true, vec![Command::SelectProvider(value.clone())])),
            None => {
                tracing::debug!("absent provider option, nothing to select");
                Ok((false, vec![]))
            }
        },
        Event::CycleProvider => {
            let Some(next) = next_provider(state) else {
                return Ok((false, vec![]));
            };
            Ok((true, vec![Command::SelectProvider(next)]))
        }
        Event::ClearHistory => Ok((true, vec![Command::ReplaceSearchHistory(vec![])])),
        Event::Tick => {
            let Some(query) = state.debounce.poll(now) else {
                return Ok((false, vec![]));
            };

            tracing::debug!(query = %query, "debounced search fired");
            let commands = search_commands(state, &query);
            Ok((!commands.is_empty(), commands))
        }
        Event::ConnectivityChanged(connected) => {
            tracing::debug!(connected = connected, "connectivity changed");
            state.connected = *connected;
            if !state.connected {
                state.debounce.cancel();
            }
            Ok((true, vec![]))
        }
        Event::ProvidersLoaded(providers) => {
            tracing::debug!(provider_count = providers.len(), "providers loaded");
            state.providers.clone_from(providers);
            Ok((true, vec![]))
        }
        Event::WorkflowResponse(response) => {
            match response {
                WorkflowResponse::SearchCompleted { query, result_count } => {
                    tracing::debug!(query = %query, result_count = result_count, "search completed");
                }
                WorkflowResponse::Error { message } => {
                    // The workflow surfaces its own failures; the controller
                    // only stops showing the spinner.
                    tracing::error!(error = %message, "search workflow reported an error");
                }
            }
            state.search_started = false;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Command::Shutdown])),
    }
}

/// Builds the search dispatch for a query, honoring the length guard.
///
/// Queries shorter than [`MIN_SEARCH_LENGTH`] produce no commands. A
/// successful dispatch also cancels any pending debounced search so the same
/// quiet period cannot fire twice.
fn search_commands(state: &mut AppState, query: &str) -> Vec<Command> {
    if query.chars().count() < MIN_SEARCH_LENGTH {
        tracing::debug!(query = %query, "query below minimum search length");
        return vec![];
    }

    state.debounce.cancel();
    vec![Command::StartUnifiedSearch {
        query: query.to_string(),
        context: NavigationContext::search_results(),
    }]
}

/// Schedules or cancels the debounced search after an input edit.
///
/// Input at or above the minimum length restarts the quiet period with the
/// latest text; shorter input cancels any pending dispatch so the debounce
/// can never fire for a query below the threshold.
fn reschedule_debounce(state: &mut AppState, now: Instant) {
    if state.input.chars().count() >= MIN_SEARCH_LENGTH {
        state.debounce.schedule(state.input.clone(), now);
    } else {
        state.debounce.cancel();
    }
}

/// Returns the `source_name` of the provider after the currently selected one.
///
/// Wraps past the end of the list; with no current selection the first
/// provider is chosen. `None` when no providers are loaded.
fn next_provider(state: &AppState) -> Option<String> {
    if state.providers.is_empty() {
        return None;
    }

    let current = state.selected_provider.as_deref().and_then(|selected| {
        state
            .providers
            .iter()
            .position(|p| p.source_name == selected)
    });

    let next_index = match current {
        Some(index) => (index + 1) % state.providers.len(),
        None => 0,
    };

    Some(state.providers[next_index].source_name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::ui::theme::Theme;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(Theme::default(), Locale::default())
    }

    fn search_queries(commands: &[Command]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::StartUnifiedSearch { query, .. } => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    fn type_text(state: &mut AppState, text: &str, now: Instant) -> Vec<Command> {
        let mut all = vec![];
        for c in text.chars() {
            let (_, commands) = handle_event(state, &Event::Char(c), now).unwrap();
            all.extend(commands);
        }
        all
    }

    #[test]
    fn enter_below_min_length_dispatches_nothing() {
        let mut state = state();
        let now = Instant::now();
        type_text(&mut state, "a", now);

        let (_, commands) = handle_event(&mut state, &Event::Enter, now).unwrap();
        assert!(search_queries(&commands).is_empty());
    }

    #[test]
    fn enter_at_min_length_dispatches_exactly_one_search() {
        let mut state = state();
        let now = Instant::now();
        type_text(&mut state, "ab", now);

        let (_, commands) = handle_event(&mut state, &Event::Enter, now).unwrap();
        assert_eq!(search_queries(&commands), vec!["ab".to_string()]);

        match &commands[0] {
            Command::StartUnifiedSearch { context, .. } => {
                assert_eq!(context.route, "/search");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn debounce_dispatches_only_the_final_value_once() {
        let mut state = state();
        let start = Instant::now();

        // Rapid keystrokes, each within the 500ms window of the previous one.
        handle_event(&mut state, &Event::Char('r'), start).unwrap();
        handle_event(&mut state, &Event::Char('a'), start + Duration::from_millis(100)).unwrap();
        handle_event(&mut state, &Event::Char('d'), start + Duration::from_millis(200)).unwrap();

        // Still inside the quiet period measured from the last keystroke.
        let (_, commands) =
            handle_event(&mut state, &Event::Tick, start + Duration::from_millis(600)).unwrap();
        assert!(commands.is_empty());

        let (_, commands) =
            handle_event(&mut state, &Event::Tick, start + Duration::from_millis(701)).unwrap();
        assert_eq!(search_queries(&commands), vec!["rad".to_string()]);

        // The slot emptied; nothing fires again.
        let (_, commands) =
            handle_event(&mut state, &Event::Tick, start + Duration::from_secs(10)).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn debounce_never_fires_below_min_length() {
        let mut state = state();
        let start = Instant::now();

        // "ab" schedules a search, backspacing down to "a" cancels it.
        type_text(&mut state, "ab", start);
        handle_event(&mut state, &Event::Backspace, start + Duration::from_millis(50)).unwrap();

        let (_, commands) =
            handle_event(&mut state, &Event::Tick, start + Duration::from_secs(2)).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn immediate_dispatch_cancels_pending_debounce() {
        let mut state = state();
        let start = Instant::now();
        type_text(&mut state, "portishead", start);

        let (_, commands) = handle_event(&mut state, &Event::Enter, start).unwrap();
        assert_eq!(search_queries(&commands).len(), 1);

        // The debounced copy of the same query must not fire afterwards.
        let (_, commands) =
            handle_event(&mut state, &Event::Tick, start + Duration::from_secs(2)).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn clear_history_always_dispatches_empty_replacement() {
        let mut state = state();
        let (_, commands) = handle_event(&mut state, &Event::ClearHistory, Instant::now()).unwrap();
        assert_eq!(commands, vec![Command::ReplaceSearchHistory(vec![])]);
    }

    #[test]
    fn provider_selection_dispatches_value_or_nothing() {
        let mut state = state();
        let now = Instant::now();

        let (_, commands) =
            handle_event(&mut state, &Event::SelectProvider(Some("V".to_string())), now).unwrap();
        assert_eq!(commands, vec![Command::SelectProvider("V".to_string())]);

        let (_, commands) = handle_event(&mut state, &Event::SelectProvider(None), now).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn cycle_provider_wraps_through_the_list() {
        let mut state = state();
        let now = Instant::now();
        state.providers = vec![
            Provider::new("Discogs", "Discogs"),
            Provider::new("Musicbrainz", "Musicbrainz"),
        ];

        let (_, commands) = handle_event(&mut state, &Event::CycleProvider, now).unwrap();
        assert_eq!(commands, vec![Command::SelectProvider("Discogs".to_string())]);
        state.apply(&commands[0]);

        let (_, commands) = handle_event(&mut state, &Event::CycleProvider, now).unwrap();
        assert_eq!(
            commands,
            vec![Command::SelectProvider("Musicbrainz".to_string())]
        );
        state.apply(&commands[0]);

        let (_, commands) = handle_event(&mut state, &Event::CycleProvider, now).unwrap();
        assert_eq!(commands, vec![Command::SelectProvider("Discogs".to_string())]);
    }

    #[test]
    fn escape_dispatches_unfocus_regardless_of_input() {
        let mut state = state();
        let now = Instant::now();
        type_text(&mut state, "massive attack", now);

        let (_, commands) = handle_event(&mut state, &Event::Escape, now).unwrap();
        assert_eq!(commands, vec![Command::SetDropdownVisibility(false)]);
        // Escape leaves the input intact.
        assert_eq!(state.input, "massive attack");
    }

    #[test]
    fn typing_focuses_the_dropdown_once() {
        let mut state = state();
        let now = Instant::now();

        let (_, commands) = handle_event(&mut state, &Event::Char('a'), now).unwrap();
        assert_eq!(commands, vec![Command::SetDropdownVisibility(true)]);
        state.apply(&commands[0]);

        let (_, commands) = handle_event(&mut state, &Event::Char('b'), now).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn offline_input_is_ignored() {
        let mut state = state();
        let now = Instant::now();
        handle_event(&mut state, &Event::ConnectivityChanged(false), now).unwrap();

        let (should_render, commands) = handle_event(&mut state, &Event::Char('x'), now).unwrap();
        assert!(!should_render);
        assert!(commands.is_empty());
        assert!(state.input.is_empty());
    }

    #[test]
    fn offline_enter_dispatches_nothing() {
        let mut state = state();
        let now = Instant::now();
        type_text(&mut state, "daft punk", now);

        handle_event(&mut state, &Event::ConnectivityChanged(false), now).unwrap();

        let (should_render, commands) = handle_event(&mut state, &Event::Enter, now).unwrap();
        assert!(!should_render);
        assert!(commands.is_empty());
        assert!(!state.search_started);
    }

    #[test]
    fn going_offline_cancels_pending_debounce() {
        let mut state = state();
        let start = Instant::now();
        type_text(&mut state, "autechre", start);

        handle_event(&mut state, &Event::ConnectivityChanged(false), start).unwrap();
        let (_, commands) =
            handle_event(&mut state, &Event::Tick, start + Duration::from_secs(2)).unwrap();
        assert!(commands.is_empty());
    }

    #[test]
    fn workflow_completion_clears_loading() {
        let mut state = state();
        let now = Instant::now();
        state.search_started = true;

        handle_event(
            &mut state,
            &Event::WorkflowResponse(WorkflowResponse::SearchCompleted {
                query: "four tet".to_string(),
                result_count: 12,
            }),
            now,
        )
        .unwrap();
        assert!(!state.search_started);

        state.search_started = true;
        handle_event(
            &mut state,
            &Event::WorkflowResponse(WorkflowResponse::Error {
                message: "provider timeout".to_string(),
            }),
            now,
        )
        .unwrap();
        assert!(!state.search_started);
    }
}
