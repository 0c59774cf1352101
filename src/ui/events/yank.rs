//! Yank (copy) handlers
//!
//! Copies what the current view is about to the system clipboard: the built
//! URL, the last outcome, or the response example.

use crate::format::format_json;
use crate::state::AppState;
use crate::types::{TestOutcome, ViewTab};
use arboard::Clipboard;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Text to copy for the widget's current tab
pub fn yank_text(state: &AppState, widget: usize) -> Option<String> {
    let w = state.data.widgets.get(widget)?;

    match w.tab() {
        ViewTab::Description => Some(format!("{} {}", w.method(), w.descriptor().path)),
        ViewTab::Test => Some(match w.outcome() {
            Some(TestOutcome::Success { data, .. }) => format_json(data),
            Some(TestOutcome::Failure { error }) => error.clone(),
            None => w.build_url(&state.session),
        }),
        ViewTab::Example => {
            let example = &w.descriptor().response_example;
            (!example.is_null()).then(|| format_json(example))
        }
    }
}

pub fn handle_yank(widget: usize, state: &Arc<RwLock<AppState>>) {
    let Some(text) = yank_text(&state.read(), widget) else {
        debug!("nothing to yank");
        return;
    };

    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            debug!("yanked to clipboard");
            state.write().ui.yank_flash = true;

            let state_clone = Arc::clone(state);
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                state_clone.write().ui.yank_flash = false;
            });
        }
        Err(e) => warn!("failed to copy to clipboard: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionConfig;
    use crate::types::{EndpointDescriptor, ParamDescriptor};
    use crate::widget::EndpointWidget;
    use serde_json::json;

    fn test_state() -> AppState {
        let mut state = AppState::new(SessionConfig::new("https://api.sidis.com", "t"));
        state.install_widgets(vec![EndpointWidget::new(EndpointDescriptor {
            path: "/users/{id}".to_string(),
            path_params: vec![ParamDescriptor {
                name: "id".to_string(),
                required: true,
                description: String::new(),
            }],
            response_example: json!({"id": 42}),
            ..Default::default()
        })]);
        state.data.widgets[0].set_path_value("id", "42");
        state
    }

    #[test]
    fn test_yank_description() {
        let state = test_state();
        assert_eq!(yank_text(&state, 0).as_deref(), Some("GET /users/{id}"));
    }

    #[test]
    fn test_yank_test_tab_url_then_outcome() {
        let mut state = test_state();
        state.data.widgets[0].select_tab(ViewTab::Test);
        assert_eq!(
            yank_text(&state, 0).as_deref(),
            Some("https://api.sidis.com/users/42")
        );

        state.data.widgets[0].finish_test(TestOutcome::Success {
            status: 200,
            status_text: "OK".to_string(),
            data: json!({"ok": true}),
        });
        assert_eq!(yank_text(&state, 0).as_deref(), Some("{\n  \"ok\": true\n}"));

        state.data.widgets[0].finish_test(TestOutcome::error("boom"));
        assert_eq!(yank_text(&state, 0).as_deref(), Some("boom"));
    }

    #[test]
    fn test_yank_example() {
        let mut state = test_state();
        state.data.widgets[0].select_tab(ViewTab::Example);
        assert_eq!(yank_text(&state, 0).as_deref(), Some("{\n  \"id\": 42\n}"));
    }

    #[test]
    fn test_yank_unknown_widget() {
        assert_eq!(yank_text(&test_state(), 9), None);
    }
}
