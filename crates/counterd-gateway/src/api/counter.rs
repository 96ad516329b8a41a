use axum::{extract::State, Json};
use serde::Serialize;

use crate::app_state::AppState;
use crate::error::ApiResult;

pub const WELCOME_MESSAGE: &str = "Welcome to the Counter API";

#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub message: &'static str,
    pub counter: u64,
}

#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub counter: u64,
}

/// Every visit counts as an increment.
pub async fn visit(State(state): State<AppState>) -> ApiResult<Json<VisitResponse>> {
    let counter = state
        .timed("increment", state.store().increment_and_get())
        .await?;
    Ok(Json(VisitResponse {
        message: WELCOME_MESSAGE,
        counter,
    }))
}

pub async fn count(State(state): State<AppState>) -> ApiResult<Json<CounterResponse>> {
    let counter = state.timed("read", state.store().read()).await?;
    Ok(Json(CounterResponse { counter }))
}

pub async fn increment(State(state): State<AppState>) -> ApiResult<Json<CounterResponse>> {
    let counter = state
        .timed("increment", state.store().increment_and_get())
        .await?;
    Ok(Json(CounterResponse { counter }))
}
