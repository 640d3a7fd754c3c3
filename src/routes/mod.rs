// HTTP routes: JSON API, CORS, front-end bundle

mod http;

use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::AppConfig;
use crate::source::MetricsSource;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) source: Arc<MetricsSource>,
    pub(crate) config: Arc<AppConfig>,
}

pub fn app(source: Arc<MetricsSource>, config: AppConfig) -> Router {
    let frontend_dir = Path::new(&config.frontend.dir);
    let index = frontend_dir.join(&config.frontend.index);
    // Unknown paths get the entry document with 200 so client-side routing works.
    let assets = ServeDir::new(frontend_dir).fallback(ServeFile::new(index));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let state = AppState {
        source,
        config: Arc::new(config),
    };
    Router::new()
        .route("/api/metrics", get(http::metrics_handler)) // GET /api/metrics
        .route("/api/config", get(http::config_handler)) // GET /api/config
        .route("/version", get(http::version_handler)) // GET /version
        .fallback_service(assets) // GET /*
        .layer(cors)
        .with_state(state)
}
