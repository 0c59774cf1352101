use crate::editor::BodyEditor;
use crate::session::{SessionConfig, SessionField};
use crate::types::{
    InputMode, LoadingState, ParamEditMode, PanelFocus, RenderItem, ViewMode,
};
use crate::widget::EndpointWidget;
use std::collections::{BTreeMap, HashSet};

/// Section name used for endpoints that do not declare one
pub const DEFAULT_SECTION: &str = "Other";

/// Identifies a widget across catalog reloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetTarget {
    pub generation: u64,
    pub index: usize,
}

/// Loaded catalog and the widgets built from it
#[derive(Debug, Clone)]
pub struct DataState {
    pub widgets: Vec<EndpointWidget>,
    pub loading_state: LoadingState,
    /// Bumped on every successful load so stale request results can be dropped
    pub generation: u64,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
            loading_state: LoadingState::Idle,
            generation: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub view_mode: ViewMode,
    pub expanded_sections: HashSet<String>,
    pub panel_focus: PanelFocus,
    /// Selected row among the editable params of the Test view
    pub selected_param_index: usize,
    /// Scroll offset for the details content (lines)
    pub response_scroll: usize,
    pub yank_flash: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Flat,
            expanded_sections: HashSet::new(),
            panel_focus: PanelFocus::EndpointsList,
            selected_param_index: 0,
            response_scroll: 0,
            yank_flash: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    pub base_url_input: String,
    pub token_input: String,
    /// Field receiving keystrokes in the configuration modal
    pub active_field: SessionField,
    pub param_edit_mode: ParamEditMode,
    pub param_edit_buffer: String,
    pub body_editor: BodyEditor,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            base_url_input: String::new(),
            token_input: String::new(),
            active_field: SessionField::BaseUrl,
            param_edit_mode: ParamEditMode::Viewing,
            param_edit_buffer: String::new(),
            body_editor: BodyEditor::new(),
        }
    }
}

impl InputState {
    pub fn field_input_mut(&mut self, field: SessionField) -> &mut String {
        match field {
            SessionField::BaseUrl => &mut self.base_url_input,
            SessionField::Token => &mut self.token_input,
        }
    }

    pub fn active_input_mut(&mut self) -> &mut String {
        self.field_input_mut(self.active_field)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    /// Indices into `DataState::widgets` matching the query
    pub filtered: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: DataState,
    pub session: SessionConfig,
    pub ui: UiState,
    pub input: InputState,
    pub search: SearchState,
}

impl AppState {
    pub fn new(session: SessionConfig) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }

    /// Replace all widgets after a catalog (re)load
    pub fn install_widgets(&mut self, widgets: Vec<EndpointWidget>) {
        self.data.widgets = widgets;
        self.data.generation += 1;
        self.data.loading_state = LoadingState::Complete;
        self.ui.selected_param_index = 0;
        self.ui.response_scroll = 0;
        self.input.param_edit_mode = ParamEditMode::Viewing;
        self.update_filtered_endpoints();
    }

    pub fn target_for(&self, index: usize) -> WidgetTarget {
        WidgetTarget {
            generation: self.data.generation,
            index,
        }
    }

    pub fn widget_mut(&mut self, target: WidgetTarget) -> Option<&mut EndpointWidget> {
        if target.generation != self.data.generation {
            return None;
        }
        self.data.widgets.get_mut(target.index)
    }

    /// Widget indices visible in the list, honoring the search filter
    pub fn active_indices(&self) -> Vec<usize> {
        if self.search.query.is_empty() {
            (0..self.data.widgets.len()).collect()
        } else {
            self.search.filtered.clone()
        }
    }

    pub fn update_filtered_endpoints(&mut self) {
        let query = self.search.query.to_lowercase();
        if query.is_empty() {
            self.search.filtered.clear();
            return;
        }

        self.search.filtered = self
            .data
            .widgets
            .iter()
            .enumerate()
            .filter(|(_, widget)| {
                let d = widget.descriptor();
                d.title.to_lowercase().contains(&query)
                    || d.path.to_lowercase().contains(&query)
                    || d.method.as_str().to_lowercase().contains(&query)
                    || d
                        .section
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&query))
            })
            .map(|(index, _)| index)
            .collect();
    }

    /// Active widgets grouped by section, sections sorted by name
    pub fn grouped_indices(&self) -> BTreeMap<String, Vec<usize>> {
        let mut grouped: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for index in self.active_indices() {
            let section = self.data.widgets[index]
                .descriptor()
                .section
                .clone()
                .unwrap_or_else(|| DEFAULT_SECTION.to_string());
            grouped.entry(section).or_default().push(index);
        }
        grouped
    }

    /// Rows of the endpoint list for the current view mode
    pub fn get_render_items(&self) -> Vec<RenderItem> {
        match self.ui.view_mode {
            ViewMode::Flat => self
                .active_indices()
                .into_iter()
                .map(|index| RenderItem::Endpoint { index })
                .collect(),
            ViewMode::Grouped => {
                let mut items = Vec::new();
                for (name, indices) in self.grouped_indices() {
                    // an active search shows every match
                    let expanded = !self.search.query.is_empty()
                        || self.ui.expanded_sections.contains(&name);
                    items.push(RenderItem::SectionHeader {
                        name,
                        count: indices.len(),
                        expanded,
                    });
                    if expanded {
                        items.extend(indices.into_iter().map(|index| RenderItem::Endpoint { index }));
                    }
                }
                items
            }
        }
    }

    /// Widget index behind the given list row, if that row is an endpoint
    pub fn selected_widget_index(&self, selected_index: usize) -> Option<usize> {
        match self.get_render_items().get(selected_index) {
            Some(RenderItem::Endpoint { index }) => Some(*index),
            _ => None,
        }
    }

    pub fn get_selected_widget(&self, selected_index: usize) -> Option<&EndpointWidget> {
        self.selected_widget_index(selected_index)
            .and_then(|index| self.data.widgets.get(index))
    }
}

/// Helper function to count visible items in current view mode
pub fn count_visible_items(state: &AppState) -> usize {
    state.get_render_items().len()
}
