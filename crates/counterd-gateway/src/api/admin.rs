use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::policy::ADMIN_TOKEN_HEADER;

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
}

/// Reset the counter to 0. The value is left untouched on any auth failure.
pub async fn reset(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Json<ResetResponse>> {
    // A header that is not visible ASCII cannot match and is treated as absent.
    let presented = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = state.admin().authorize(presented) {
        state.metrics().admin_rejections.inc(&[]);
        tracing::warn!(
            header_present = presented.is_some(),
            configured = state.admin().is_configured(),
            "admin reset rejected"
        );
        return Err(e.into());
    }

    state.timed("reset", state.store().reset()).await?;
    tracing::info!(path = %state.store().path().display(), "counter reset by admin");
    Ok(Json(ResetResponse {
        message: "counter reset",
    }))
}

