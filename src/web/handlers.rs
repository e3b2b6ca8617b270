//! HTTP request handlers

use super::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

const INVALID_INPUT_TITLE: &str = "Invalid input";
const INVALID_INPUT_DETAIL: &str =
    "The search string must not be empty and cannot exceed the maximum allowed length.";

/// Query parameters for search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Raw search string
    pub search_string: Option<String>,
}

/// Validation failure body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    pub title: String,
    pub detail: String,
    pub status: u16,
    pub max_length: usize,
}

impl ProblemDetails {
    fn invalid_input(max_length: usize) -> Self {
        Self {
            title: INVALID_INPUT_TITLE.to_string(),
            detail: INVALID_INPUT_DETAIL.to_string(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            max_length,
        }
    }
}

/// Search handler
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let max_length = state.max_query_length();

    let query = match params.search_string {
        Some(q) if !q.is_empty() && q.chars().count() <= max_length => q,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ProblemDetails::invalid_input(max_length)),
            )
                .into_response();
        }
    };

    let result = state.aggregator.aggregate(&query).await;

    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(result)).into_response()
}

/// Metrics handler
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
