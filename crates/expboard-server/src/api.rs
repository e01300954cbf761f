//! API handlers and embedded front-end serving for expboard-server.

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::warn;

use expboard_core::DashboardConfig;

use crate::state::AppState;

// ─── Router ──────────────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(get_dashboard_config))
        .route("/health", get(health))
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ConfigResponse<'a> {
    version: &'static str,
    #[serde(flatten)]
    dashboard: &'a DashboardConfig,
}

async fn get_dashboard_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(ConfigResponse {
        version: env!("CARGO_PKG_VERSION"),
        dashboard: &state.dashboard,
    })
    .into_response()
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// ─── Frontend (embedded) ─────────────────────────────────────────────────────

/// Serve the embedded frontend HTML/JS/CSS, falling back to `index.html`.
pub async fn serve_frontend(uri: axum::http::Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    let (actual_path, content) = match Assets::get(path) {
        Some(content) => (path, content),
        None => match Assets::get("index.html") {
            Some(content) => ("index.html", content),
            None => {
                warn!(path, "no embedded index.html, was the front-end built?");
                return StatusCode::NOT_FOUND.into_response();
            }
        },
    };

    let mime = mime_guess::from_path(actual_path).first_or_octet_stream();

    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(content.data.into_owned()))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

#[derive(rust_embed::Embed)]
#[folder = "../../frontend/dist"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
#[include = "*.wasm"]
struct Assets;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_router;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(dashboard: DashboardConfig) -> axum::Router {
        build_router(AppState::new(dashboard))
    }

    #[tokio::test]
    async fn test_config_endpoint() {
        let dashboard = DashboardConfig {
            api_url: "http://tracker:8000/api/v1".to_string(),
            ..Default::default()
        };
        let resp = app(dashboard)
            .oneshot(Request::get("/api/config").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["api_url"], "http://tracker:8000/api/v1");
        assert_eq!(json["app_prefix"], "/app");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_config_round_trips_into_dashboard_config() {
        let resp = app(DashboardConfig::default())
            .oneshot(Request::get("/api/config").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let parsed: DashboardConfig = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, DashboardConfig::default());
    }

    #[tokio::test]
    async fn test_health() {
        let resp = app(DashboardConfig::default())
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
