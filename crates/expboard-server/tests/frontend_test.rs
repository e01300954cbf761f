//! Client-side routes must be answered by the single-page app.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use expboard_core::DashboardConfig;
use expboard_server::{build_router, state::AppState};

#[tokio::test]
async fn test_detail_page_path_serves_index() {
    let app = build_router(AppState::new(DashboardConfig::default()));
    for path in [
        "/app/alice/proj1/experiments/42",
        "/app/alice/proj1/experiments/42/metrics",
        "/app/alice/proj1/experiments/42/build",
    ] {
        let resp = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "path {}", path);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "text/html");
    }
}

#[tokio::test]
async fn test_cors_preflight_allows_reads_only() {
    let app = build_router(AppState::new(DashboardConfig::default()));
    let resp = app
        .oneshot(
            Request::options("/api/config")
                .header(header::ORIGIN, "http://tracker.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("GET"));
    assert!(!methods.contains("DELETE"));
}
