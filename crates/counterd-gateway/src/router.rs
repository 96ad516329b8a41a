//! Axum router wiring.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::counter::visit))
        .route("/count", get(api::counter::count))
        .route("/inc", post(api::counter::increment))
        .route("/admin/reset", post(api::admin::reset))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .with_state(state)
}

/// Count responses per matched route and status code.
async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_default();

    let res = next.run(req).await;
    state
        .metrics()
        .requests
        .inc(&[("route", &route), ("status", res.status().as_str())]);
    res
}
