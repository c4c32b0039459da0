//! folio-ui library - project gallery service
//!
//! Serves the gallery page for one data document, owns the single gallery
//! controller and streams its state changes to connected pages.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use folio_common::events::EventBus;
use tokio::sync::RwLock;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cards;
pub mod controller;
pub mod render;

use controller::GalleryController;
use render::PageRenderer;

/// SSE broadcast buffer
const EVENT_CAPACITY: usize = 100;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The one gallery state; every interaction takes the write lock once
    pub gallery: Arc<RwLock<GalleryController>>,
    pub renderer: Arc<PageRenderer>,
    pub events: EventBus,
    /// Wait between a card starting to collapse and its detail region hiding
    pub collapse_delay: Duration,
    /// Base folder for relative media URLs
    pub site_root: PathBuf,
}

impl AppState {
    /// Create new application state
    pub fn new(
        controller: GalleryController,
        collapse_delay: Duration,
        site_root: PathBuf,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            gallery: Arc::new(RwLock::new(controller)),
            renderer: Arc::new(PageRenderer::new()?),
            events: EventBus::new(EVENT_CAPACITY),
            collapse_delay,
            site_root,
        })
    }
}

/// Build application router
///
/// Unmatched paths are served from the site root so media URLs in the data
/// document resolve the way they would next to a static page.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let site = ServeDir::new(&state.site_root);

    let api = Router::new()
        .route("/api/projects", get(api::get_projects))
        .route("/api/tags", get(api::get_tags))
        .route("/api/filters/toggle", post(api::toggle_filter))
        .route("/api/filters/remove", post(api::remove_filter))
        .route("/api/dropdown/toggle", post(api::toggle_dropdown))
        .route("/api/dropdown/close", post(api::close_dropdown))
        .route("/api/cards/:id/click", post(api::click_card))
        .route("/api/cards/:id/hover", post(api::hover_card))
        .route("/api/cards/:id/leave", post(api::leave_card))
        .route("/api/diagnostics/playback", post(api::report_playback_failure))
        .route("/api/events", get(api::event_stream))
        .route("/api/buildinfo", get(api::get_build_info));

    let ui = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/gallery.css", get(api::serve_gallery_css))
        .route("/fragments/gallery", get(api::gallery_fragment))
        .route("/fragments/filters", get(api::filters_fragment))
        .route("/fragments/dropdown", get(api::dropdown_fragment))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .merge(ui)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
