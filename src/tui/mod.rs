//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Search Triggering
//!
//! The event loop compares the state's search term against the term used
//! for the previous fetch on every iteration. A mismatch dispatches
//! `SetLoading(true)` and spawns a fresh search task; the first iteration
//! fires the startup search this way. In-flight requests are never
//! cancelled, so overlapping searches race and the response delivered
//! last wins.
//!
//! ## Redraw Strategy
//!
//! Conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (loading spinner): draws every ~80ms for smooth animation.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, error, info, warn};
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::client::OmdbClient;
use crate::core::action::{Action, reduce};
use crate::core::config::ResolvedConfig;
use crate::core::state::AppState;
use crate::tui::component::EventHandler;
use crate::tui::components::{MovieGridState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core view state)
pub struct TuiState {
    pub search_box: SearchBox,
    pub grid: MovieGridState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            grid: MovieGridState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(std::io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            std::io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = Arc::new(OmdbClient::new(
        config.api_key.clone(),
        Some(config.base_url.clone()),
    ));
    let mut state = AppState::new(config.search_term.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background search tasks
    let (tx, rx) = mpsc::channel();

    // Term used for the previous fetch; a mismatch re-runs the search.
    let mut fetched_term: Option<String> = None;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Re-fetch whenever the search term changed since the last run.
        // Fires the startup search on the first iteration.
        if fetched_term.as_deref() != Some(state.search_term.as_str()) {
            state = reduce(&state, &Action::SetLoading(true));
            fetched_term = Some(state.search_term.clone());
            spawn_search(client.clone(), state.search_term.clone(), tx.clone());
            needs_redraw = true;
        }

        let animating = state.loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &state, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Quit goes through the reducer (a no-op there) so the exit
            // shows up in the action log like everything else
            if matches!(event, TuiEvent::Quit) {
                state = reduce(&state, &Action::Quit);
                should_quit = true;
                continue;
            }

            // Scroll events always go to the grid
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.grid.handle_event(&event);
                continue;
            }

            // The search box is only on screen when not loading; while the
            // placeholder is up there is no form to type into
            if state.loading {
                continue;
            }

            if let Some(SearchEvent::Submit(term)) = tui.search_box.handle_event(&event) {
                // Submitted verbatim: no trimming, empty terms included
                state = reduce(&state, &Action::SetSearchTerm(term));
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (search results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            state = reduce(&state, &action);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Spawns one search task. The task reports back over the action channel
/// on success and only logs on failure, leaving the loading flag set.
fn spawn_search(client: Arc<OmdbClient>, term: String, tx: mpsc::Sender<Action>) {
    info!("Spawning search request for {:?}", term);
    tokio::spawn(async move {
        match client.search(&term).await {
            Ok(body) if body.is_success() => {
                debug!("Search {:?} returned {} movies", term, body.search.len());
                if tx.send(Action::SetMovies(body.search)).is_err() {
                    warn!("Failed to send search results: receiver dropped");
                }
            }
            Ok(body) => {
                error!(
                    "Error fetching movies: {}",
                    body.error
                        .unwrap_or_else(|| "unknown API error".to_string())
                );
            }
            Err(e) => {
                error!("Search request for {:?} failed: {}", term, e);
            }
        }
    });
}
