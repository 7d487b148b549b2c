//! Latest-draw lookup and history refresh endpoints
//!
//! `GET /api/v1/latest` returns the most recent historical draw on file.
//! `POST /api/v1/refresh` re-reads the data file from disk and swaps the
//! in-memory cache; refreshes are serialised by a mutex so a generation
//! request never observes a half-swapped cache.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use lotto_store::DrawRecord;
use serde::Serialize;

use super::generate::ErrorResponse;
use super::{AppState, HistoryCache};

/// The most recent historical draw
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestResponse {
    /// Drawing date (ISO format)
    pub date: String,
    /// White numbers, ascending
    pub white: Vec<u16>,
    /// Red (bonus) number
    pub red: u16,
    /// Power-play multiplier when recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_play: Option<String>,
}

impl From<DrawRecord> for LatestResponse {
    fn from(record: DrawRecord) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            white: record.whites,
            red: record.red,
            power_play: record.power_play,
        }
    }
}

/// Refresh outcome
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// Data rows before the reload
    pub rows_before: usize,
    /// Data rows after the reload
    pub rows_after: usize,
    /// Net rows gained
    pub rows_added: usize,
    /// Most recent draw after the reload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<LatestResponse>,
}

/// Build the history routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/latest", get(latest_handler))
        .route("/api/v1/refresh", post(refresh_handler))
}

/// GET /api/v1/latest - Most recent historical draw
async fn latest_handler(State(state): State<AppState>) -> Response {
    let store = state.store();
    let latest = tokio::task::spawn_blocking(move || store.latest()).await;

    match latest {
        Ok(Ok(Some(record))) => {
            (StatusCode::OK, Json(LatestResponse::from(record))).into_response()
        }
        Ok(Ok(None)) => {
            let body = ErrorResponse::new("no_rows", "no rows in data file");
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "latest lookup failed");
            let body = ErrorResponse::new("no_data", "data file not found");
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "latest task failed");
            let body = ErrorResponse::new("internal", "latest task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// POST /api/v1/refresh - Reload the history cache from disk
async fn refresh_handler(State(state): State<AppState>) -> Response {
    // One refresh at a time; readers keep the old cache until the swap.
    let _guard = state.refresh_lock.lock().await;

    let rows_before = state
        .history
        .read()
        .await
        .as_ref()
        .map(|c| c.rows)
        .unwrap_or(0);

    let store = state.store();
    let reload = tokio::task::spawn_blocking(move || {
        let draws = store.load_history()?;
        let rows = store.row_count()?;
        let latest = store.latest()?;
        Ok::<_, lotto_store::StoreError>((draws, rows, latest))
    })
    .await;

    match reload {
        Ok(Ok((draws, rows, latest))) => {
            *state.history.write().await = Some(HistoryCache { draws, rows });
            tracing::info!(rows_before, rows_after = rows, "history refreshed");
            let body = RefreshResponse {
                rows_before,
                rows_after: rows,
                rows_added: rows.saturating_sub(rows_before),
                latest: latest.map(LatestResponse::from),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "refresh failed");
            let body = ErrorResponse::new("no_data", e.to_string());
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "refresh task failed");
            let body = ErrorResponse::new("internal", "refresh task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;

    fn state_with_data() -> (TempDir, AppState) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "date,w1,w2,w3,w4,w5,powerball,power_play,source_url").unwrap();
        writeln!(file, "2023-01-02,4,8,15,16,23,9,2,").unwrap();
        writeln!(file, "2023-01-04,1,2,3,4,5,6,,").unwrap();
        drop(file);

        let config = ServerConfig {
            data_file: path,
            ..Default::default()
        };
        (dir, AppState::new(Arc::new(config)))
    }

    async fn request(
        router: Router,
        method: &str,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_latest_returns_max_date() {
        let (_dir, state) = state_with_data();
        let router = routes().with_state(state);
        let (status, body) = request(router, "GET", "/api/v1/latest").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2023-01-04");
        assert_eq!(body["white"], serde_json::json!([1, 2, 3, 4, 5]));
        assert_eq!(body["red"], 6);
    }

    #[tokio::test]
    async fn test_latest_missing_file_returns_404() {
        let state = AppState::new(Arc::new(ServerConfig::default()));
        let router = routes().with_state(state);
        let (status, body) = request(router, "GET", "/api/v1/latest").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no_data");
    }

    #[tokio::test]
    async fn test_refresh_picks_up_appended_rows() {
        let (dir, state) = state_with_data();
        let router = routes().with_state(state.clone());

        // Append a row behind the server's back, the way the scraper does.
        let path = dir.path().join("history.csv");
        let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "2023-01-07,7,8,9,10,11,12,,").unwrap();
        drop(file);

        let (status, body) = request(router, "POST", "/api/v1/refresh").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rowsBefore"], 2);
        assert_eq!(body["rowsAfter"], 3);
        assert_eq!(body["rowsAdded"], 1);
        assert_eq!(body["latest"]["date"], "2023-01-07");

        // The cache now excludes the appended draw too.
        assert_eq!(state.history.read().await.as_ref().unwrap().rows, 3);
    }

    #[tokio::test]
    async fn test_refresh_missing_file_returns_503() {
        let state = AppState::new(Arc::new(ServerConfig::default()));
        let router = routes().with_state(state);
        let (status, body) = request(router, "POST", "/api/v1/refresh").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "no_data");
    }
}
