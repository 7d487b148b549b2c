//! Route modules for the lotto server
//!
//! This module contains endpoint group-specific routers:
//! - generate: Unique-draw generation endpoint
//! - history: Latest-draw lookup and history refresh endpoints
//! - health: Health check and monitoring endpoints

pub mod generate;
pub mod health;
pub mod history;

use std::collections::HashSet;
use std::sync::Arc;

use axum::Router;
use lotto_core::types::{Draw, Rules};
use lotto_store::HistoryStore;
use tokio::sync::{Mutex, RwLock};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// In-memory snapshot of the history data file.
#[derive(Clone, Debug)]
pub struct HistoryCache {
    /// The validated exclusion set.
    pub draws: HashSet<Draw>,
    /// Number of data rows in the file the snapshot came from.
    pub rows: usize,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Cached history; `None` until a data file has been loaded
    pub history: Arc<RwLock<Option<HistoryCache>>>,
    /// Serialises refresh operations against each other
    pub refresh_lock: Arc<Mutex<()>>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState, loading the history cache from the
    /// configured data file when it is present.
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let cache = load_cache(&config);
        Self {
            config,
            history: Arc::new(RwLock::new(cache)),
            refresh_lock: Arc::new(Mutex::new(())),
            start_time: std::time::Instant::now(),
        }
    }

    /// The store bound to the configured data file.
    pub fn store(&self) -> HistoryStore {
        HistoryStore::new(self.config.data_file.clone(), Rules::powerball())
    }
}

/// Loads the history cache from disk, tolerating a missing or unreadable
/// file (the server starts anyway and reports 503 until a refresh works).
pub fn load_cache(config: &ServerConfig) -> Option<HistoryCache> {
    let store = HistoryStore::new(config.data_file.clone(), Rules::powerball());
    if !store.exists() {
        tracing::warn!(path = %config.data_file.display(), "history data file not found");
        return None;
    }
    match (store.load_history(), store.row_count()) {
        (Ok(draws), Ok(rows)) => {
            tracing::info!(rows, draws = draws.len(), "history loaded");
            Some(HistoryCache { draws, rows })
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(error = %e, "failed to load history data file");
            None
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(health::routes())
        .merge(generate::routes())
        .merge(history::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_build_router_creates_valid_router() {
        let config = Arc::new(ServerConfig::default());
        let router = build_router(config);

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_merges_all_route_groups() {
        let config = Arc::new(ServerConfig::default());
        let router = build_router(config);

        // Health routes
        let response = router
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Generate without a data file: unavailable, not missing
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/generate?count=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        // Latest without a data file
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/latest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let config = Arc::new(ServerConfig::default());
        let router = build_router(config);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/unknown/path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_app_state_uptime() {
        let config = Arc::new(ServerConfig::default());
        let state = AppState::new(config);

        std::thread::sleep(std::time::Duration::from_millis(10));

        let elapsed = state.start_time.elapsed();
        assert!(elapsed.as_millis() >= 10);
    }
}
