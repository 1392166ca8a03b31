//! Terminal shim for the unified search box.
//!
//! Owns the terminal through crossterm (raw mode, alternate screen),
//! translates key events into application events, runs the event loop with a
//! periodic tick for the debounce slot, and bridges search commands to the
//! workflow thread.

use std::io::Write;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};

use unisono::app::{handle_event, AppState, Command, Event};
use unisono::domain::{Provider, Result};
use unisono::observability::init_tracing;
use unisono::ui::renderer;
use unisono::workflow::{self, LoggingSearch, WorkflowRequest, WorkflowResponse};
use unisono::Config;

/// Tick interval driving the debounce slot and workflow polling.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Fallback terminal dimensions when the size query fails.
const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 80;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let mut state = unisono::initialize(&config);
    let (request_tx, response_rx) = workflow::spawn(Box::new(LoggingSearch));

    terminal::enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut state, &request_tx, &response_rx);

    execute!(std::io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

/// The event loop: polls the terminal with the tick cadence, runs events
/// through the handler, and drains workflow responses.
fn run(
    state: &mut AppState,
    request_tx: &mpsc::Sender<String>,
    response_rx: &mpsc::Receiver<String>,
) -> Result<()> {
    let (mut cols, mut rows) = terminal::size()
        .map(|(c, r)| (c as usize, r as usize))
        .unwrap_or((DEFAULT_COLS, DEFAULT_ROWS));

    // The host would load these from its provider registry; the shim ships a
    // fixed set.
    let providers = vec![
        Provider::new("Discogs", "Discogs"),
        Provider::new("Musicbrainz", "Musicbrainz"),
        Provider::new("iTunes", "iTunes"),
    ];
    process_event(
        state,
        &Event::ProvidersLoaded(providers),
        request_tx,
        rows,
        cols,
    );

    render_full(state, rows, cols);

    loop {
        let app_event = if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    match map_key(&key) {
                        Some(app_event) => app_event,
                        None => continue,
                    }
                }
                TerminalEvent::Resize(new_cols, new_rows) => {
                    cols = new_cols as usize;
                    rows = new_rows as usize;
                    render_full(state, rows, cols);
                    continue;
                }
                _ => continue,
            }
        } else {
            Event::Tick
        };

        if !process_event(state, &app_event, request_tx, rows, cols) {
            return Ok(());
        }

        while let Ok(raw) = response_rx.try_recv() {
            let Ok(response) = serde_json::from_str::<WorkflowResponse>(&raw) else {
                tracing::error!(raw = %raw, "undecodable workflow response");
                continue;
            };
            process_event(
                state,
                &Event::WorkflowResponse(response),
                request_tx,
                rows,
                cols,
            );
        }
    }
}

/// Maps a terminal key event to an application event.
///
/// Unmapped keys (arrows, function keys, other control chords) produce
/// nothing rather than leaking into the input text. Plain and shifted
/// characters pass through unchanged, including non-ASCII input.
fn map_key(key: &KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Event::Quit),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Event::ClearHistory)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Event::Char(c))
        }
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Enter => Some(Event::Enter),
        KeyCode::Esc => Some(Event::Escape),
        KeyCode::Tab => Some(Event::CycleProvider),
        _ => None,
    }
}

/// Runs one event through the handler, the reducer, and the renderer.
///
/// Returns `false` when the application should exit.
fn process_event(
    state: &mut AppState,
    event: &Event,
    request_tx: &mpsc::Sender<String>,
    rows: usize,
    cols: usize,
) -> bool {
    let (should_render, commands) = match handle_event(state, event, Instant::now()) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "event handling failed");
            return true;
        }
    };

    for command in &commands {
        state.apply(command);

        match command {
            Command::StartUnifiedSearch { query, context } => {
                let request = WorkflowRequest::start_search(
                    query.clone(),
                    state.selected_provider.clone(),
                    context.route.clone(),
                );
                match serde_json::to_string(&request) {
                    Ok(json) => {
                        if request_tx.send(json).is_err() {
                            tracing::error!("workflow thread is gone");
                        }
                    }
                    Err(e) => tracing::error!(error = %e, "failed to encode workflow request"),
                }
            }
            Command::Shutdown => return false,
            _ => {}
        }
    }

    if should_render {
        render_full(state, rows, cols);
    }

    true
}

/// Clears the screen and redraws the whole UI.
fn render_full(state: &AppState, rows: usize, cols: usize) {
    print!("\u{1b}[2J\u{1b}[H");
    renderer::render(state, rows, cols);
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn navigation_keys_produce_no_events() {
        // Arrow keys must not be read as Escape plus typed characters.
        for code in [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::F(1),
        ] {
            assert_eq!(map_key(&key(code, KeyModifiers::NONE)), None);
        }
    }

    #[test]
    fn non_ascii_characters_pass_through() {
        assert_eq!(
            map_key(&key(KeyCode::Char('ö'), KeyModifiers::NONE)),
            Some(Event::Char('ö'))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('É'), KeyModifiers::SHIFT)),
            Some(Event::Char('É'))
        );
    }

    #[test]
    fn control_chords_map_to_their_actions() {
        assert_eq!(
            map_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Event::Quit)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(Event::ClearHistory)
        );
        // Other control chords are ignored.
        assert_eq!(map_key(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn editing_keys_map_to_their_events() {
        assert_eq!(
            map_key(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Event::Backspace)
        );
        assert_eq!(
            map_key(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Event::Enter)
        );
        assert_eq!(
            map_key(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Event::Escape)
        );
        assert_eq!(
            map_key(&key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Event::CycleProvider)
        );
    }
}
