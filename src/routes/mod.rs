// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::cache::ResponseCache;
use crate::config::AppConfig;
use crate::github_repo::GithubRepo;
use crate::wakatime_repo::WakatimeRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) github_repo: Arc<GithubRepo>,
    pub(crate) wakatime_repo: Arc<WakatimeRepo>,
    pub(crate) cache: Arc<ResponseCache>,
    pub(crate) config: AppConfig,
}

pub fn app(
    github_repo: Arc<GithubRepo>,
    wakatime_repo: Arc<WakatimeRepo>,
    cache: Arc<ResponseCache>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        github_repo,
        wakatime_repo,
        cache,
        config,
    };
    Router::new()
        .route("/", get(|| async { "devdash: developer activity dashboard" }))
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/github", get(http::github_handler)) // GET /api/github
        .route("/api/wakatime", get(http::wakatime_handler)) // GET /api/wakatime
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
