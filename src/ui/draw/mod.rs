//! UI drawing module
//!
//! - `components`: header, footer, search bar, list placeholders
//! - `modals`: session configuration and body editor dialogs
//! - `panels`: endpoint list and details panel
//! - `tabs`: the Description / Test / Example views
//! - `styling`: color schemes

mod components;
mod modals;
mod panels;
mod styling;
mod tabs;

pub use components::{render_footer, render_header, render_search_bar};
pub use modals::{render_body_editor_modal, render_config_modal};
pub use panels::{render_details_panel, render_endpoints_panel};
