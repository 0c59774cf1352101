//! Parameter editing handlers
//!
//! Inline editing of the Test tab's path and query parameters. While a value
//! is being edited every printable key goes to the edit buffer.

use super::helpers::{apply, collect_paste_batch};
use crate::actions::AppAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Enter edit mode for the currently selected parameter
pub fn handle_param_edit(widget: usize, state: &Arc<RwLock<AppState>>) {
    let target = {
        let s = state.read();
        let selected = s.ui.selected_param_index;
        s.data.widgets.get(widget).and_then(|w| {
            w.editable_params()
                .get(selected)
                .map(|(kind, name)| (*kind, name.to_string()))
        })
    };

    if let Some((kind, name)) = target {
        debug!(?kind, %name, "editing parameter");
        apply(state, AppAction::StartEditingParam { widget, kind, name });
    }
}

/// Keys while a parameter value is being edited
pub fn handle_param_edit_key(key: KeyEvent, widget: usize, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Enter => {
            apply(state, AppAction::ConfirmParamEdit { widget });
            debug!("confirmed parameter edit");
        }
        KeyCode::Esc => apply(state, AppAction::CancelParamEdit),
        KeyCode::Backspace => apply(state, AppAction::BackspaceParamBuffer),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearParamBuffer);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (batch, _) = collect_paste_batch(c);
            apply(state, AppAction::AppendToParamBuffer(batch));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EndpointDescriptor, ParamDescriptor, ParamEditMode, ParamKind};
    use crate::widget::EndpointWidget;

    fn param(name: &str) -> ParamDescriptor {
        ParamDescriptor {
            name: name.to_string(),
            required: true,
            description: String::new(),
        }
    }

    fn test_state() -> Arc<RwLock<AppState>> {
        let mut state = AppState::default();
        state.install_widgets(vec![EndpointWidget::new(EndpointDescriptor {
            path: "/users/{id}".to_string(),
            path_params: vec![param("id")],
            query_params: vec![param("limit")],
            ..Default::default()
        })]);
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_edit_targets_selected_param() {
        let state = test_state();
        state.write().ui.selected_param_index = 1;

        handle_param_edit(0, &state);
        assert_eq!(
            state.read().input.param_edit_mode,
            ParamEditMode::Editing {
                kind: ParamKind::Query,
                name: "limit".to_string()
            }
        );
    }

    #[test]
    fn test_edit_out_of_range_is_ignored() {
        let state = test_state();
        state.write().ui.selected_param_index = 7;

        handle_param_edit(0, &state);
        assert_eq!(state.read().input.param_edit_mode, ParamEditMode::Viewing);
    }

    #[test]
    fn test_edit_keys() {
        let state = test_state();
        handle_param_edit(0, &state);
        state.write().input.param_edit_buffer = "42x".to_string();

        handle_param_edit_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE), 0, &state);
        handle_param_edit_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), 0, &state);

        let s = state.read();
        assert_eq!(s.data.widgets[0].path_value("id"), "42");
        assert_eq!(s.input.param_edit_mode, ParamEditMode::Viewing);
    }

    #[test]
    fn test_escape_discards_edit() {
        let state = test_state();
        handle_param_edit(0, &state);
        state.write().input.param_edit_buffer = "99".to_string();

        handle_param_edit_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), 0, &state);
        assert_eq!(state.read().data.widgets[0].path_value("id"), "");
    }
}
