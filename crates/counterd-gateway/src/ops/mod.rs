//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness, never touches the store
//! - `/readyz`  : readiness via a real read + write round-trip (503 when draining)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_path: Option<String>,
}

pub async fn healthz() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let failure = if state.is_draining() {
        Some("draining".to_string())
    } else {
        match state.timed("probe", state.store().probe()).await {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        }
    };

    match failure {
        None => (
            StatusCode::OK,
            Json(Readiness {
                ready: true,
                error: None,
                counter_path: None,
            }),
        ),
        Some(error) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Readiness {
                ready: false,
                error: Some(error),
                counter_path: Some(state.store().path().display().to_string()),
            }),
        ),
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let extra = state.metrics_extra().await;
    let body = state.metrics().render(&extra);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
