// GET handlers: version, api/github, api/wakatime

use axum::response::{IntoResponse, Response};
use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;

use super::AppState;
use crate::error::Error;
use crate::version::{NAME, VERSION};

// Fixed client-facing messages; upstream detail stays in the server log.
const GITHUB_TOKEN_MISSING: &str = "Token do GitHub não configurado";
const WAKATIME_KEY_MISSING: &str = "Chave da API do WakaTime não configurada";
const GITHUB_FETCH_FAILED: &str = "Falha ao buscar dados do GitHub";
const WAKATIME_FETCH_FAILED: &str = "Falha ao buscar dados do WakaTime";

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(json!({
        "name": NAME,
        "version": VERSION,
    }))
}

fn error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}

/// GET /api/github — profile header, pinned repositories, and per-language
/// repository counts, cached for the configured window.
pub(super) async fn github_handler(State(state): State<AppState>) -> Response {
    if state.config.github.token.is_none() {
        return error_response(GITHUB_TOKEN_MISSING);
    }

    let repo = state.github_repo.clone();
    let result = state
        .cache
        .get_or_compute("github", || async move {
            let summary = repo.get_summary().await?;
            serde_json::to_value(summary).map_err(Error::from)
        })
        .await;

    match result {
        Ok(value) => Json(value.as_ref().clone()).into_response(),
        Err(e) => {
            tracing::error!(operation = "github_summary", error = %e, "GitHub aggregation failed");
            error_response(GITHUB_FETCH_FAILED)
        }
    }
}

/// GET /api/wakatime — last-7-days and all-time coding stats, cached for the
/// configured window.
pub(super) async fn wakatime_handler(State(state): State<AppState>) -> Response {
    if state.config.wakatime.api_key.is_none() {
        return error_response(WAKATIME_KEY_MISSING);
    }

    let repo = state.wakatime_repo.clone();
    let result = state
        .cache
        .get_or_compute("wakatime", || async move {
            let summary = repo.get_summary().await?;
            serde_json::to_value(summary).map_err(Error::from)
        })
        .await;

    match result {
        Ok(value) => Json(value.as_ref().clone()).into_response(),
        Err(e) => {
            tracing::error!(operation = "wakatime_summary", error = %e, "WakaTime aggregation failed");
            error_response(WAKATIME_FETCH_FAILED)
        }
    }
}
