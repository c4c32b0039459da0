//! HTTP API handlers for folio-ui

pub mod buildinfo;
pub mod cards;
pub mod diagnostics;
pub mod dropdown;
pub mod error;
pub mod filters;
pub mod health;
pub mod projects;
pub mod sse;
pub mod ui;

pub use buildinfo::get_build_info;
pub use cards::{click_card, hover_card, leave_card};
pub use diagnostics::report_playback_failure;
pub use dropdown::{close_dropdown, toggle_dropdown};
pub use error::ApiError;
pub use filters::{remove_filter, toggle_filter};
pub use health::health_routes;
pub use projects::{get_projects, get_tags};
pub use sse::event_stream;
pub use ui::{
    dropdown_fragment, filters_fragment, gallery_fragment, serve_app_js, serve_gallery_css,
    serve_index,
};
