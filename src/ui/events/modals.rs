//! Modal dialog handlers
//!
//! - Session configuration (base URL and token)
//! - Request body editor

use super::helpers::{apply, collect_paste_batch};
use crate::actions::AppAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

pub fn handle_config_dialog(state: &Arc<RwLock<AppState>>) {
    apply(state, AppAction::EnterConfigMode);
    debug!("entering session configuration");
}

/// Handle a key in the configuration modal (with paste batching support)
pub fn handle_config_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => apply(state, AppAction::SwitchConfigField),
        KeyCode::Enter => {
            apply(state, AppAction::ApplyConfig);
            let s = state.read();
            // the token itself never reaches the log
            info!(
                base_url = %s.session.base_url,
                has_token = !s.session.token.is_empty(),
                ready = s.session.is_ready(),
                "session configuration updated"
            );
        }
        KeyCode::Esc => apply(state, AppAction::ExitConfigMode),
        KeyCode::Backspace => apply(state, AppAction::BackspaceConfigInput),
        KeyCode::Char('l') if ctrl => apply(state, AppAction::ClearConfigInput),
        KeyCode::Char('w') if ctrl => apply(state, AppAction::DeleteWordConfigInput),
        KeyCode::Char(c) if !ctrl => {
            let (batch, count) = collect_paste_batch(c);
            if count > 1 {
                debug!(count, "pasted into configuration field");
            }
            apply(state, AppAction::AppendToConfigInput(batch));
        }
        _ => {}
    }
}

pub fn handle_body_dialog(widget: usize, state: &Arc<RwLock<AppState>>) {
    let supports_body = state
        .read()
        .data
        .widgets
        .get(widget)
        .is_some_and(|w| w.shows_body_editor());

    if supports_body {
        apply(state, AppAction::OpenBodyEditor { widget });
    }
}

/// Handle a key in the body editor modal
pub fn handle_body_input(key: KeyEvent, widget: usize, state: &Arc<RwLock<AppState>>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => apply(state, AppAction::CancelBodyEdit),
        KeyCode::Char('s') if ctrl => {
            apply(state, AppAction::SaveBody { widget });
            debug!("request body saved");
        }
        KeyCode::Char('f') if ctrl => {
            if let Err(e) = state.write().input.body_editor.format_json() {
                debug!("body not formatted: {e}");
            }
        }
        KeyCode::Char(c) if !ctrl => {
            let (batch, _) = collect_paste_batch(c);
            state.write().input.body_editor.insert_str(&batch);
        }
        _ => {
            state.write().input.body_editor.handle_key_event(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionConfig;
    use crate::types::{EndpointDescriptor, HttpMethod, InputMode};
    use crate::widget::EndpointWidget;

    fn test_state() -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(SessionConfig::default());
        state.install_widgets(vec![
            EndpointWidget::new(EndpointDescriptor {
                method: HttpMethod::Post,
                path: "/users".to_string(),
                request_body: Some("{\"name\":\"Ana\"}".to_string()),
                ..Default::default()
            }),
            EndpointWidget::new(EndpointDescriptor {
                path: "/users".to_string(),
                ..Default::default()
            }),
        ]);
        Arc::new(RwLock::new(state))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_config_modal_flow() {
        let state = test_state();
        handle_config_dialog(&state);
        assert_eq!(state.read().input.mode, InputMode::EditingConfig);

        handle_config_input(key(KeyCode::Tab, KeyModifiers::NONE), &state);
        state.write().input.token_input = "secret-token".to_string();
        handle_config_input(key(KeyCode::Char('w'), KeyModifiers::CONTROL), &state);
        assert_eq!(state.read().input.token_input, "");

        state.write().input.token_input = "abc".to_string();
        handle_config_input(key(KeyCode::Enter, KeyModifiers::NONE), &state);

        let s = state.read();
        assert_eq!(s.input.mode, InputMode::Normal);
        assert_eq!(s.session.token, "abc");
        assert!(s.session.is_ready());
    }

    #[test]
    fn test_config_escape_discards() {
        let state = test_state();
        handle_config_dialog(&state);
        handle_config_input(key(KeyCode::Char('l'), KeyModifiers::CONTROL), &state);
        handle_config_input(key(KeyCode::Esc, KeyModifiers::NONE), &state);

        assert_eq!(state.read().session.base_url, "https://api.sidis.com");
    }

    #[test]
    fn test_body_dialog_only_for_body_methods() {
        let state = test_state();

        handle_body_dialog(1, &state);
        assert_eq!(state.read().input.mode, InputMode::Normal);

        handle_body_dialog(0, &state);
        assert_eq!(state.read().input.mode, InputMode::EditingBody);
        assert_eq!(state.read().input.body_editor.content(), "{\"name\":\"Ana\"}");
    }

    #[test]
    fn test_body_format_and_save() {
        let state = test_state();
        handle_body_dialog(0, &state);

        handle_body_input(key(KeyCode::Char('f'), KeyModifiers::CONTROL), 0, &state);
        handle_body_input(key(KeyCode::Char('s'), KeyModifiers::CONTROL), 0, &state);

        let s = state.read();
        assert_eq!(s.input.mode, InputMode::Normal);
        assert_eq!(s.data.widgets[0].body(), "{\n  \"name\": \"Ana\"\n}");
    }

    #[test]
    fn test_body_editing_keys_reach_editor() {
        let state = test_state();
        handle_body_dialog(0, &state);

        handle_body_input(key(KeyCode::Backspace, KeyModifiers::NONE), 0, &state);
        handle_body_input(key(KeyCode::Esc, KeyModifiers::NONE), 0, &state);

        let s = state.read();
        assert_eq!(s.input.body_editor.content(), "{\"name\":\"Ana\"");
        // cancelled: the widget keeps its body
        assert_eq!(s.data.widgets[0].body(), "{\"name\":\"Ana\"}");
    }
}
