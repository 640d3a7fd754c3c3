// GET handlers: metrics, config, version

use axum::{extract::State, response::IntoResponse};

use super::AppState;
use crate::models::ThemeConfig;
use crate::version::{NAME, VERSION};

/// GET /api/metrics — one fresh sample from the configured source.
pub(super) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.source.sample().await)
}

/// GET /api/config
pub(super) async fn config_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(ThemeConfig {
        theme: state.config.ui.theme.clone(),
    })
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}
