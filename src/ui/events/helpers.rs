//! Helper functions for event handling
//!
//! - State locking helpers (apply actions)
//! - Selection lookups
//! - Paste batching

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::types::{PanelFocus, ParamEditMode, ViewTab};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use parking_lot::RwLock;
use std::sync::Arc;

/// Snapshot of what the user is looking at, taken under a short read lock
#[derive(Debug, Clone, PartialEq)]
pub struct Focus {
    pub panel: PanelFocus,
    /// Index into the loaded widgets, if the selected row is an endpoint
    pub widget: Option<usize>,
    pub tab: Option<ViewTab>,
    pub editing_param: bool,
}

pub fn focus(state: &Arc<RwLock<AppState>>, selected_index: usize) -> Focus {
    let s = state.read();
    let widget = s.selected_widget_index(selected_index);
    Focus {
        panel: s.ui.panel_focus.clone(),
        widget,
        tab: widget.and_then(|i| s.data.widgets.get(i)).map(|w| w.tab()),
        editing_param: matches!(s.input.param_edit_mode, ParamEditMode::Editing { .. }),
    }
}

impl Focus {
    /// Details panel showing the given tab of an endpoint
    pub fn on_tab(&self, tab: ViewTab) -> bool {
        self.panel == PanelFocus::Details && self.tab == Some(tab)
    }
}

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    apply_action(action, &mut state.write());
}

/// Apply multiple actions under one lock
pub fn apply_many(state: &Arc<RwLock<AppState>>, actions: Vec<AppAction>) {
    let mut s = state.write();
    for action in actions {
        apply_action(action, &mut s);
    }
}

/// Collect a batch of characters for paste support
///
/// When a character is typed, any immediately available character events are
/// drained and batched together so pastes land as one edit.
///
/// Returns a tuple of (batched_string, character_count)
pub fn collect_paste_batch(initial_char: char) -> (String, usize) {
    let mut chars = vec![initial_char];

    while let Ok(true) = event::poll(std::time::Duration::from_millis(0)) {
        match event::read() {
            Ok(Event::Key(next_key)) => match next_key.code {
                KeyCode::Char(next_c) if !next_key.modifiers.contains(KeyModifiers::CONTROL) => {
                    chars.push(next_c);
                }
                // non-character or control key ends the batch
                _ => break,
            },
            _ => break,
        }
    }

    let count = chars.len();
    (chars.into_iter().collect(), count)
}
