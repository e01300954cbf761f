//! expboard-server: Axum server hosting the dashboard front-end.
//!
//! The dashboard is a single-page app: every path that is not an API route or
//! an embedded asset is answered with `index.html` and routed client-side.
//! Experiment data itself comes from the tracking API named in the dashboard
//! config, not from this server.

pub mod api;
pub mod state;

use axum::http::Method;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::state::AppState;

pub use state::ServerConfig;

/// Everything here is read-only, so cross-origin callers only get GET.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers(Any)
}

/// `/api/*` for dashboard metadata, the embedded front-end for the rest.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::router())
        .fallback(api::serve_frontend)
        .with_state(state)
        .layer(cors())
}

/// Validate the dashboard config, then serve until the listener fails.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.dashboard.validate()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = build_router(AppState::new(config.dashboard.clone()));

    info!(
        api_url = %config.dashboard.api_url,
        "expboard dashboard at http://{}{}",
        addr,
        config.dashboard.app_prefix
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
