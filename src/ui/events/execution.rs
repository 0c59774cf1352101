//! Test execution handlers
//!
//! - Running the selected widget's test call (Space/Enter)
//! - Expanding/collapsing sections in grouped mode

use super::navigation::{clamp_selection, handle_section_toggle};
use crate::request::execute_request_background;
use crate::state::AppState;
use crate::widget::TestStart;
use parking_lot::RwLock;
use ratatui::widgets::ListState;
use std::sync::Arc;
use tracing::{debug, warn};

/// Start a test call for the given widget.
/// Returns true when a request was actually sent.
pub fn handle_run(widget: usize, state: &Arc<RwLock<AppState>>, client: &reqwest::Client) -> bool {
    // build the request under the write lock, send it after releasing
    let (start, target) = {
        let mut s = state.write();
        let target = s.target_for(widget);
        let session = s.session.clone();
        let Some(w) = s.data.widgets.get_mut(widget) else {
            return false;
        };
        (w.begin_test(&session), target)
    };

    match start {
        TestStart::Ready(request) => {
            debug!(widget, "test started");
            state.write().ui.response_scroll = 0;
            execute_request_background(Arc::clone(state), client.clone(), target, request);
            true
        }
        TestStart::Rejected => {
            warn!("test rejected: base URL or token not configured");
            false
        }
        TestStart::Busy => {
            debug!("test already in flight for this endpoint");
            false
        }
    }
}

/// Space on the endpoint list: toggle a section header, or run the endpoint
pub fn handle_list_activate(
    selected_index: &mut usize,
    state: &Arc<RwLock<AppState>>,
    list_state: &mut ListState,
    client: &reqwest::Client,
) {
    if handle_section_toggle(*selected_index, state) {
        clamp_selection(selected_index, state, list_state);
        return;
    }

    let widget = state.read().selected_widget_index(*selected_index);
    if let Some(widget) = widget {
        handle_run(widget, state, client);
    }
}
