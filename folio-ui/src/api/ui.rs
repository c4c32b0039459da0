//! UI serving routes
//!
//! The page itself is rendered from the controller's current state; the
//! script and stylesheet are embedded static assets.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use folio_common::events::GalleryEvent;

use super::ApiError;
use crate::render::GalleryView;
use crate::AppState;

const APP_JS: &str = include_str!("../../ui/app.js");
const GALLERY_CSS: &str = include_str!("../../ui/gallery.css");

/// GET /
///
/// Serves the gallery page. Each load starts a new page lifetime: no
/// filters, dropdown closed, every card collapsed.
pub async fn serve_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let mut gallery = state.gallery.write().await;
    if gallery.start_page() {
        let count = gallery.render_context().count;
        state.events.emit_lossy(GalleryEvent::FiltersChanged {
            selected: Vec::new(),
            shown: count.shown,
            total: count.total,
            timestamp: chrono::Utc::now(),
        });
    }
    Ok(Html(state.renderer.page(&gallery)?))
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// GET /static/gallery.css
pub async fn serve_gallery_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css")],
        GALLERY_CSS,
    )
        .into_response()
}

/// GET /fragments/gallery
///
/// Inner HTML of the projects container for the current filters
pub async fn gallery_fragment(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let gallery = state.gallery.read().await;
    let view = GalleryView::from_controller(&gallery);
    Ok(Html(state.renderer.gallery(&view)?))
}

/// GET /fragments/filters
///
/// Placeholder and selected-tag chips
pub async fn filters_fragment(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let gallery = state.gallery.read().await;
    Ok(Html(state.renderer.filters(gallery.filters().tags())?))
}

/// GET /fragments/dropdown
pub async fn dropdown_fragment(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let gallery = state.gallery.read().await;
    Ok(Html(state.renderer.dropdown(&gallery.dropdown_options())?))
}
