use crate::catalog::{self, CatalogSource};
use crate::cli::Args;
use crate::config::Config;
use crate::session::{SessionConfig, DEFAULT_BASE_URL};
use crate::state::{count_visible_items, AppState};
use crate::types::InputMode;
use crate::ui::{self, draw};
use color_eyre::Result;
use parking_lot::RwLock;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    DefaultTerminal, Frame,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    list_state: ListState,
    catalog_source: CatalogSource,
    client: reqwest::Client,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

/// Initial session: command line, then config file, then the built-in default
pub fn initial_session(config: &Config, args: &Args) -> SessionConfig {
    let base_url = args
        .base_url
        .clone()
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let token = args.token.clone().unwrap_or_default();

    SessionConfig::new(base_url, token)
}

impl App {
    pub fn new(config: &Config, args: Args) -> Self {
        let session = initial_session(config, &args);
        let catalog_source = CatalogSource::parse(&config.catalog_source(args.catalog.as_deref()));
        let client = reqwest::Client::new();

        Self {
            state: Arc::new(RwLock::new(AppState::new(session))),
            list_state: ListState::default(),
            catalog_source,
            client: client.clone(),
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(client),
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.load_catalog();

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            let outcome = self
                .event_handler
                .handle_events(&self.state, &mut self.list_state)?;

            if outcome.reload_catalog {
                self.load_catalog();
            }
        }

        info!("quitting");
        Ok(())
    }

    fn load_catalog(&self) {
        info!(source = %self.catalog_source, "loading catalog");
        catalog::load_catalog_background(
            Arc::clone(&self.state),
            self.client.clone(),
            self.catalog_source.clone(),
        );
    }

    /// Keep the list selection valid for whatever the list currently shows
    fn sync_selection(&mut self, state: &AppState) {
        let count = count_visible_items(state);
        let selected = &mut self.event_handler.selected_index;

        if count == 0 {
            *selected = 0;
            self.list_state.select(None);
        } else {
            *selected = (*selected).min(count - 1);
            self.list_state.select(Some(*selected));
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let state_arc = Arc::clone(&self.state);
        let state = state_arc.read();

        // a reload may have shrunk the list
        self.sync_selection(&state);

        // Create main layout: Header, Search Bar, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[2]);

        draw::render_header(
            frame,
            main_chunks[0],
            &self.catalog_source.to_string(),
            &state.data.loading_state,
            state.data.widgets.len(),
            &state.session,
        );

        draw::render_search_bar(frame, main_chunks[1], &state);

        draw::render_endpoints_panel(
            frame,
            body_chunks[0],
            &state,
            self.spinner_index,
            &mut self.list_state,
        );

        draw::render_details_panel(
            frame,
            body_chunks[1],
            &state,
            self.event_handler.selected_index,
        );

        draw::render_footer(frame, main_chunks[3], &state.ui.view_mode);

        // Render modals LAST - after everything else
        match state.input.mode {
            InputMode::EditingConfig => draw::render_config_modal(frame, &state),
            InputMode::EditingBody => draw::render_body_editor_modal(frame, &state),
            InputMode::Normal | InputMode::Searching => {}
        }
    }
}
