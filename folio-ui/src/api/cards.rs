//! Card interaction endpoints
//!
//! A click answers with the transitions to apply, in order. Each collapse
//! also schedules a timer that hides the card's detail region once the
//! transition has run; the result is published as `CardCollapsed`.

use axum::{
    extract::{Path, State},
    Json,
};
use folio_common::events::{GalleryEvent, MediaAction};
use serde::Serialize;
use tracing::debug;

use super::ApiError;
use crate::cards::{CardTransition, CollapseTicket};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct TransitionView {
    pub card: usize,
    /// "expanded" or "collapsing"
    pub state: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub card: usize,
    pub transitions: Vec<TransitionView>,
}

#[derive(Debug, Serialize)]
pub struct MediaResponse {
    pub card: usize,
    /// `null` for cards without video
    pub action: Option<MediaAction>,
}

/// POST /api/cards/:id/click
pub async fn click_card(
    State(state): State<AppState>,
    Path(card): Path<usize>,
) -> Result<Json<ClickResponse>, ApiError> {
    let transitions = state.gallery.write().await.click_card(card)?;

    let mut views = Vec::with_capacity(transitions.len());
    for transition in transitions {
        let timestamp = chrono::Utc::now();
        match transition {
            CardTransition::Expanded(card) => {
                state
                    .events
                    .emit_lossy(GalleryEvent::CardExpanded { card, timestamp });
                views.push(TransitionView {
                    card,
                    state: "expanded",
                });
            }
            CardTransition::Collapsing(ticket) => {
                state.events.emit_lossy(GalleryEvent::CardCollapsing {
                    card: ticket.card,
                    timestamp,
                });
                schedule_collapse(&state, ticket);
                views.push(TransitionView {
                    card: ticket.card,
                    state: "collapsing",
                });
            }
        }
    }

    Ok(Json(ClickResponse {
        card,
        transitions: views,
    }))
}

/// POST /api/cards/:id/hover
pub async fn hover_card(
    State(state): State<AppState>,
    Path(card): Path<usize>,
) -> Result<Json<MediaResponse>, ApiError> {
    let action = state.gallery.read().await.hover_card(card)?;
    Ok(Json(publish_media(&state, card, action)))
}

/// POST /api/cards/:id/leave
pub async fn leave_card(
    State(state): State<AppState>,
    Path(card): Path<usize>,
) -> Result<Json<MediaResponse>, ApiError> {
    let action = state.gallery.read().await.leave_card(card)?;
    Ok(Json(publish_media(&state, card, action)))
}

fn publish_media(state: &AppState, card: usize, action: Option<MediaAction>) -> MediaResponse {
    if let Some(action) = action {
        state.events.emit_lossy(GalleryEvent::MediaCommand {
            card,
            action,
            timestamp: chrono::Utc::now(),
        });
    }
    MediaResponse { card, action }
}

fn schedule_collapse(state: &AppState, ticket: CollapseTicket) {
    let state = state.clone();
    tokio::spawn(async move {
        tokio::time::sleep(state.collapse_delay).await;

        if state.gallery.write().await.finish_collapse(ticket) {
            state.events.emit_lossy(GalleryEvent::CardCollapsed {
                card: ticket.card,
                timestamp: chrono::Utc::now(),
            });
        } else {
            debug!(
                "Stale collapse timer for card {} (generation {})",
                ticket.card, ticket.generation
            );
        }
    });
}
