//! Filter mutation endpoints
//!
//! Both endpoints answer with everything the page needs to redraw: the chip
//! display first, then the dropdown, then the gallery and its counter.

use axum::{extract::State, Json};
use folio_common::events::GalleryEvent;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ApiError;
use crate::controller::GalleryController;
use crate::render::GalleryView;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TagRequest {
    pub tag: String,
}

#[derive(Debug, Serialize)]
pub struct RedrawResponse {
    pub selected: Vec<String>,
    pub shown: usize,
    pub total: usize,
    pub counter: Option<String>,
    pub dropdown_open: bool,
    pub filters_html: String,
    pub dropdown_html: String,
    pub gallery_html: String,
}

/// POST /api/filters/toggle
///
/// Dropdown option clicked: toggles the tag, closes the dropdown, re-renders.
pub async fn toggle_filter(
    State(state): State<AppState>,
    Json(request): Json<TagRequest>,
) -> Result<Json<RedrawResponse>, ApiError> {
    let mut gallery = state.gallery.write().await;
    let was_open = gallery.dropdown_open();
    let selected = gallery.toggle_filter(&request.tag)?;
    info!(
        "Filter '{}' {}",
        request.tag.trim(),
        if selected { "selected" } else { "deselected" }
    );

    let response = redraw(&state, &gallery)?;
    publish_filters(&state, &response);
    if was_open {
        state.events.emit_lossy(GalleryEvent::DropdownChanged {
            open: false,
            options: Vec::new(),
            timestamp: chrono::Utc::now(),
        });
    }
    Ok(Json(response))
}

/// POST /api/filters/remove
///
/// Chip remove mark clicked. Removing an unselected tag changes nothing.
pub async fn remove_filter(
    State(state): State<AppState>,
    Json(request): Json<TagRequest>,
) -> Result<Json<RedrawResponse>, ApiError> {
    let mut gallery = state.gallery.write().await;
    let removed = gallery.remove_filter(&request.tag)?;

    let response = redraw(&state, &gallery)?;
    if removed {
        info!("Filter '{}' removed", request.tag.trim());
        publish_filters(&state, &response);
    }
    Ok(Json(response))
}

fn redraw(state: &AppState, gallery: &GalleryController) -> Result<RedrawResponse, ApiError> {
    let selected = gallery.filters().tags().to_vec();
    let view = GalleryView::from_controller(gallery);
    let count = gallery.render_context().count;

    Ok(RedrawResponse {
        filters_html: state.renderer.filters(&selected)?,
        dropdown_html: state.renderer.dropdown(&gallery.dropdown_options())?,
        gallery_html: state.renderer.gallery(&view)?,
        counter: view.counter(),
        shown: count.shown,
        total: count.total,
        dropdown_open: gallery.dropdown_open(),
        selected,
    })
}

fn publish_filters(state: &AppState, response: &RedrawResponse) {
    state.events.emit_lossy(GalleryEvent::FiltersChanged {
        selected: response.selected.clone(),
        shown: response.shown,
        total: response.total,
        timestamp: chrono::Utc::now(),
    });
}
