//! Navigation handlers
//!
//! - List navigation (up/down in endpoints list)
//! - Parameter navigation (j/k on the Test tab)
//! - Section expand/collapse and view mode toggling

use super::helpers::{apply, apply_many};
use crate::actions::AppAction;
use crate::state::{count_visible_items, AppState};
use crate::types::RenderItem;
use parking_lot::RwLock;
use ratatui::widgets::ListState;
use std::sync::Arc;
use tracing::debug;

fn select(selected_index: &mut usize, list_state: &mut ListState, index: usize) {
    *selected_index = index;
    list_state.select(Some(index));
}

/// Navigate up in endpoints list
pub fn handle_up(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    if *selected_index > 0 {
        select(selected_index, list_state, *selected_index - 1);

        // fresh endpoint, fresh param cursor and scroll
        apply_many(
            state,
            vec![AppAction::ResetParamIndex, AppAction::ResetResponseScroll],
        );
    }
}

/// Navigate down in endpoints list
pub fn handle_down(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    let max_index = count_visible_items(&state.read()).saturating_sub(1);

    if *selected_index < max_index {
        select(selected_index, list_state, *selected_index + 1);
        apply_many(
            state,
            vec![AppAction::ResetParamIndex, AppAction::ResetResponseScroll],
        );
    }
}

/// Keep the selection inside the list after it shrank (search, collapse, reload)
pub fn clamp_selection(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    let count = count_visible_items(&state.read());
    if count == 0 {
        *selected_index = 0;
        list_state.select(None);
    } else if *selected_index >= count || list_state.selected().is_none() {
        select(selected_index, list_state, (*selected_index).min(count - 1));
    }
}

pub fn handle_param_up(state: &Arc<RwLock<AppState>>) {
    apply(state, AppAction::NavigateParamUp);
}

pub fn handle_param_down(widget: usize, state: &Arc<RwLock<AppState>>) {
    let count = state
        .read()
        .data
        .widgets
        .get(widget)
        .map(|w| w.editable_params().len())
        .unwrap_or(0);
    apply(state, AppAction::NavigateParamDown { count });
}

/// Expand or collapse the section under the cursor.
/// Returns false when the selected row is not a section header.
pub fn handle_section_toggle(selected_index: usize, state: &Arc<RwLock<AppState>>) -> bool {
    let section = match state.read().get_render_items().get(selected_index) {
        Some(RenderItem::SectionHeader { name, .. }) => name.clone(),
        _ => return false,
    };

    debug!(%section, "toggling section");
    apply(state, AppAction::ToggleSectionExpanded(section));
    true
}

/// Toggle between flat and grouped view modes
pub fn handle_toggle_view(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
) {
    apply(state, AppAction::ToggleViewMode);

    // Reset selection to top
    select(selected_index, list_state, 0);

    debug!(view_mode = ?state.read().ui.view_mode, "switched view mode");
}
