//! Read-only gallery data endpoints

use axum::{extract::State, Json};
use folio_common::ProjectRecord;
use serde::Serialize;

use crate::controller::TagOption;
use crate::AppState;

/// One visible project with its card id
#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub card: usize,
    #[serde(flatten)]
    pub record: ProjectRecord,
}

/// Render context as JSON
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    /// "ready", "empty" or "error"
    pub status: &'static str,
    /// Fallback message shown instead of the gallery
    pub message: Option<&'static str>,
    /// "Showing: X/Y"; absent while a fallback message is shown
    pub counter: Option<String>,
    pub shown: usize,
    pub total: usize,
    pub selected: Vec<String>,
    pub projects: Vec<ProjectView>,
}

/// GET /api/projects
///
/// Visible projects in display order for the current filters
pub async fn get_projects(State(state): State<AppState>) -> Json<ProjectsResponse> {
    let gallery = state.gallery.read().await;
    let catalog = gallery.catalog();
    let ctx = gallery.render_context();
    let message = catalog.fallback_message();

    Json(ProjectsResponse {
        status: catalog.status(),
        message,
        counter: message.is_none().then(|| ctx.count.to_string()),
        shown: ctx.count.shown,
        total: ctx.count.total,
        selected: gallery.filters().tags().to_vec(),
        projects: ctx
            .visible
            .iter()
            .map(|entry| ProjectView {
                card: entry.index,
                record: entry.record.clone(),
            })
            .collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    /// Configured priority list
    pub vocabulary: Vec<String>,
    /// Tags currently offered, with selection marks
    pub options: Vec<TagOption>,
    pub selected: Vec<String>,
}

/// GET /api/tags
pub async fn get_tags(State(state): State<AppState>) -> Json<TagsResponse> {
    let gallery = state.gallery.read().await;

    Json(TagsResponse {
        vocabulary: gallery.vocabulary().order().to_vec(),
        options: gallery.dropdown_options(),
        selected: gallery.filters().tags().to_vec(),
    })
}
