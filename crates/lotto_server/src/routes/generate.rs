//! Unique-draw generation endpoint
//!
//! `GET /api/v1/generate?count=&seed=` runs the core generator against the
//! cached history and returns the fresh draws as JSON. The sampling loop
//! is CPU-bound, so it runs on a blocking worker thread rather than on the
//! async runtime.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use lotto_core::sampler::{GenerateError, GeneratorConfig, UniqueDrawGenerator};
use lotto_core::types::Rules;
use serde::{Deserialize, Serialize};

use super::AppState;

/// Query parameters for the generate endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateParams {
    /// Number of draws to produce (default 5)
    pub count: Option<usize>,
    /// Optional seed for reproducible output
    pub seed: Option<u64>,
}

/// Error body returned for every non-200 outcome
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

/// Build the generate routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/generate", get(generate_handler))
}

/// GET /api/v1/generate - Generate draws absent from the history
async fn generate_handler(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Response {
    let count = params.count.unwrap_or(5);
    let max = state.config.max_draws_per_request;
    if count < 1 || count > max {
        let body = ErrorResponse::new(
            "invalid_count",
            format!("count must be between 1 and {}", max),
        );
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    // Snapshot the cache under the read lock; generation happens outside it.
    let history = {
        let guard = state.history.read().await;
        match guard.as_ref() {
            Some(cache) => cache.draws.clone(),
            None => {
                let body = ErrorResponse::new(
                    "no_data",
                    format!(
                        "history data file not loaded (expected {}); refresh or supply the file",
                        state.config.data_file.display()
                    ),
                );
                return (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
            }
        }
    };

    let mut builder = GeneratorConfig::builder().count(count);
    if let Some(seed) = params.seed {
        builder = builder.seed(seed);
    }
    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            let body = ErrorResponse::new("invalid_config", e.to_string());
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let result = tokio::task::spawn_blocking(move || {
        let generator = UniqueDrawGenerator::new(Rules::powerball());
        generator.generate(&history, &config)
    })
    .await;

    match result {
        Ok(Ok(draws)) => (StatusCode::OK, Json(draws)).into_response(),
        Ok(Err(e @ GenerateError::HistoryCoversSpace { .. })) => {
            let body = ErrorResponse::new("space_exhausted", e.to_string());
            (StatusCode::CONFLICT, Json(body)).into_response()
        }
        Ok(Err(e @ GenerateError::TooManyTries { .. })) => {
            let body = ErrorResponse::new("too_many_tries", e.to_string());
            (StatusCode::CONFLICT, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "generation task failed");
            let body = ErrorResponse::new("internal", "generation task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
