//! Event handling
//!
//! Processes user input and translates it into state-changing actions.
//! Input modes:
//! - Normal: navigation and commands
//! - EditingConfig: modal for the session base URL and token
//! - Searching: filtering endpoints by query
//! - EditingBody: modal body editor for POST/PUT/PATCH
//! - Parameter editing: inline editing on the Test tab (a sub-mode of Normal)
//!
//! # Architecture
//!
//! Input events generate AppActions that are applied to AppState via
//! `apply_action` in actions.rs. Network and clipboard side effects happen
//! here, after the state lock has been released.
//!
//! # Lock Management
//!
//! Locks on `Arc<RwLock<AppState>>` are held only for the duration of a
//! single lookup or action. Background request tasks take the write lock
//! when they finish.

mod execution;
mod helpers;
mod modals;
mod navigation;
mod parameters;
mod search;
mod yank;

use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{InputMode, PanelFocus, ViewTab};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use helpers::{apply, focus};
use parking_lot::RwLock;
use ratatui::widgets::ListState;
use std::sync::Arc;
use std::time::Duration;

/// What the app loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub reload_catalog: bool,
}

/// Event handler for managing user input and state updates
#[derive(Debug)]
pub struct EventHandler {
    pub should_quit: bool,
    pub selected_index: usize,
    client: reqwest::Client,
}

impl EventHandler {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            should_quit: false,
            selected_index: 0,
            client,
        }
    }

    /// Poll for one input event and dispatch it based on the input mode
    pub fn handle_events(
        &mut self,
        state: &Arc<RwLock<AppState>>,
        list_state: &mut ListState,
    ) -> Result<EventOutcome> {
        if !event::poll(Duration::from_millis(50))? {
            return Ok(EventOutcome::default());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key, state, list_state)),
            _ => Ok(EventOutcome::default()),
        }
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        list_state: &mut ListState,
    ) -> EventOutcome {
        let input_mode = state.read().input.mode.clone();

        match input_mode {
            InputMode::EditingConfig => modals::handle_config_input(key, state),
            InputMode::EditingBody => match focus(state, self.selected_index).widget {
                Some(widget) => modals::handle_body_input(key, widget, state),
                None => apply(state, AppAction::CancelBodyEdit),
            },
            InputMode::Searching => {
                search::handle_search_input(&mut self.selected_index, key, state, list_state);
            }
            InputMode::Normal => return self.handle_normal_key(key, state, list_state),
        }

        EventOutcome::default()
    }

    fn handle_normal_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        list_state: &mut ListState,
    ) -> EventOutcome {
        let focus = focus(state, self.selected_index);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // an inline parameter edit swallows every key
        if focus.editing_param {
            match focus.widget {
                Some(widget) => parameters::handle_param_edit_key(key, widget, state),
                None => apply(state, AppAction::CancelParamEdit),
            }
            return EventOutcome::default();
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,

            // catalog reload
            KeyCode::F(5) => return EventOutcome { reload_catalog: true },
            KeyCode::Char('r') if ctrl => return EventOutcome { reload_catalog: true },

            // ctrl + modifiers
            KeyCode::Char('l') if ctrl => {
                search::handle_search_clear(&mut self.selected_index, state, list_state);
            }
            KeyCode::Char('u') if ctrl => {
                if focus.panel == PanelFocus::Details {
                    apply(state, AppAction::ScrollUp);
                }
            }
            KeyCode::Char('d') if ctrl => {
                if focus.panel == PanelFocus::Details {
                    apply(state, AppAction::ScrollDown);
                }
            }

            // nav down
            KeyCode::Char('j') | KeyCode::Down => match focus.panel {
                PanelFocus::EndpointsList => {
                    navigation::handle_down(&mut self.selected_index, state, list_state);
                }
                PanelFocus::Details => {
                    if let (true, Some(widget)) = (focus.on_tab(ViewTab::Test), focus.widget) {
                        navigation::handle_param_down(widget, state);
                    }
                }
            },
            // nav up
            KeyCode::Char('k') | KeyCode::Up => match focus.panel {
                PanelFocus::EndpointsList => {
                    navigation::handle_up(&mut self.selected_index, state, list_state);
                }
                PanelFocus::Details => {
                    if focus.on_tab(ViewTab::Test) {
                        navigation::handle_param_up(state);
                    }
                }
            },

            // toggle view - list <-> grouped
            KeyCode::Char('g') => {
                navigation::handle_toggle_view(&mut self.selected_index, state, list_state);
            }
            KeyCode::Char('c') => modals::handle_config_dialog(state),
            KeyCode::Char('/') => search::handle_search_activate(state),

            // direct view selection
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(widget) = focus.widget {
                    let tab = ViewTab::ALL[(c as usize) - ('1' as usize)];
                    apply(state, AppAction::SelectTab { widget, tab });
                }
            }

            KeyCode::Char('e') => {
                if let (true, Some(widget)) = (focus.on_tab(ViewTab::Test), focus.widget) {
                    parameters::handle_param_edit(widget, state);
                }
            }
            KeyCode::Char('b') => {
                if let (true, Some(widget)) = (focus.on_tab(ViewTab::Test), focus.widget) {
                    modals::handle_body_dialog(widget, state);
                }
            }
            KeyCode::Char('y') => {
                if let Some(widget) = focus.widget {
                    yank::handle_yank(widget, state);
                }
            }

            // panel / tab cycling
            KeyCode::Tab => match focus.widget {
                Some(widget) => apply(state, AppAction::NavigateTabForward { widget }),
                None => apply(state, AppAction::NavigateToPanel(PanelFocus::EndpointsList)),
            },
            KeyCode::BackTab => match focus.widget {
                Some(widget) => apply(state, AppAction::NavigateTabBackward { widget }),
                None => apply(state, AppAction::NavigateToPanel(PanelFocus::EndpointsList)),
            },

            // space - run test or toggle section
            KeyCode::Char(' ') => match focus.panel {
                PanelFocus::EndpointsList => execution::handle_list_activate(
                    &mut self.selected_index,
                    state,
                    list_state,
                    &self.client,
                ),
                PanelFocus::Details => {
                    if let (true, Some(widget)) = (focus.on_tab(ViewTab::Test), focus.widget) {
                        execution::handle_run(widget, state, &self.client);
                    }
                }
            },
            KeyCode::Enter => match focus.panel {
                PanelFocus::EndpointsList => {
                    if navigation::handle_section_toggle(self.selected_index, state) {
                        navigation::clamp_selection(&mut self.selected_index, state, list_state);
                    } else if focus.widget.is_some() {
                        apply(state, AppAction::NavigateToPanel(PanelFocus::Details));
                    }
                }
                PanelFocus::Details => {
                    if let (true, Some(widget)) = (focus.on_tab(ViewTab::Test), focus.widget) {
                        execution::handle_run(widget, state, &self.client);
                    }
                }
            },
            KeyCode::Esc => {
                if focus.panel == PanelFocus::Details {
                    apply(state, AppAction::NavigateToPanel(PanelFocus::EndpointsList));
                }
            }

            _ => {}
        }

        EventOutcome::default()
    }
}
