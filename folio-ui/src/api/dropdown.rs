//! Dropdown open/close endpoints

use axum::{extract::State, Json};
use folio_common::events::GalleryEvent;
use serde::Serialize;
use tracing::debug;

use super::ApiError;
use crate::controller::TagOption;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DropdownResponse {
    pub open: bool,
    pub options: Vec<TagOption>,
    pub dropdown_html: String,
}

/// POST /api/dropdown/toggle
///
/// Placeholder, chip name or empty chip area clicked. Options are recomputed
/// from the eligible records every time.
pub async fn toggle_dropdown(
    State(state): State<AppState>,
) -> Result<Json<DropdownResponse>, ApiError> {
    let mut gallery = state.gallery.write().await;
    let open = gallery.toggle_dropdown();
    let options = gallery.dropdown_options();
    debug!("Dropdown {}", if open { "opened" } else { "closed" });

    state.events.emit_lossy(GalleryEvent::DropdownChanged {
        open,
        options: if open {
            options.iter().map(|o| o.tag.clone()).collect()
        } else {
            Vec::new()
        },
        timestamp: chrono::Utc::now(),
    });

    Ok(Json(DropdownResponse {
        open,
        dropdown_html: state.renderer.dropdown(&options)?,
        options,
    }))
}

/// POST /api/dropdown/close
///
/// Click outside the dropdown's interactive regions
pub async fn close_dropdown(
    State(state): State<AppState>,
) -> Result<Json<DropdownResponse>, ApiError> {
    let mut gallery = state.gallery.write().await;
    if gallery.close_dropdown() {
        state.events.emit_lossy(GalleryEvent::DropdownChanged {
            open: false,
            options: Vec::new(),
            timestamp: chrono::Utc::now(),
        });
    }

    let options = gallery.dropdown_options();
    Ok(Json(DropdownResponse {
        open: false,
        dropdown_html: state.renderer.dropdown(&options)?,
        options,
    }))
}
