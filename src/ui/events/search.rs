//! Search handlers
//!
//! Filtering the endpoint list by title, path, method or section.

use super::helpers::{apply, collect_paste_batch};
use super::navigation::clamp_selection;
use crate::actions::AppAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::RwLock;
use ratatui::widgets::ListState;
use std::sync::Arc;
use tracing::debug;

pub fn handle_search_activate(state: &Arc<RwLock<AppState>>) {
    apply(state, AppAction::EnterSearchMode);
}

/// Handle a key while the search bar has focus
pub fn handle_search_input(
    selected_index: &mut usize,
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    match key.code {
        KeyCode::Enter => {
            // keep the filter applied
            apply(state, AppAction::ExitSearchMode);
            return;
        }
        KeyCode::Esc => {
            apply(state, AppAction::ClearSearchQuery);
            apply(state, AppAction::ExitSearchMode);
            debug!("search cancelled");
        }
        KeyCode::Backspace => apply(state, AppAction::BackspaceSearchQuery),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearSearchQuery);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (batch, _) = collect_paste_batch(c);
            apply(state, AppAction::AppendToSearchQuery(batch));
        }
        _ => return,
    }

    debug!(query = %state.read().search.query, "search query changed");

    // query changed: back to the top of the list
    *selected_index = 0;
    list_state.select(Some(0));
    clamp_selection(selected_index, state, list_state);
}

/// Clear search filter (Ctrl+L in normal mode)
pub fn handle_search_clear(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    if state.read().search.query.is_empty() {
        return;
    }

    apply(state, AppAction::ClearSearchQuery);
    debug!("cleared search filter");

    *selected_index = 0;
    list_state.select(Some(0));
}
