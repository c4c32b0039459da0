//! Client-side diagnostics
//!
//! Browsers may refuse to autoplay a hovered video. The page reports the
//! failure here so it lands in the service log instead of a console nobody
//! reads.

use axum::{http::StatusCode, Json};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct PlaybackFailure {
    pub card: usize,
    pub message: String,
}

/// POST /api/diagnostics/playback
pub async fn report_playback_failure(Json(report): Json<PlaybackFailure>) -> StatusCode {
    warn!(
        "Video playback failed on card {}: {}",
        report.card, report.message
    );
    StatusCode::NO_CONTENT
}
