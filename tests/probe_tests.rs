//! Integration tests driving the probe router end to end.
//!
//! Requests go through the real router with tower's `oneshot`, so the disk,
//! CPU, and RAM probes read the actual host. Their status codes depend on
//! live readings; assertions are therefore phrased as label/status
//! consistency plus exact body shape, while the liveness probe is asserted
//! byte for byte.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use vigil::routes::create_router;

const BODY_LIMIT: usize = 64 * 1024;

async fn probe(path: &str) -> (StatusCode, Option<String>, String) {
    let app = create_router();

    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("build request");

    let response = app.oneshot(request).await.expect("route request");

    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| v.to_str().expect("header is ascii").to_string());
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let body = String::from_utf8(bytes.to_vec()).expect("body is utf-8");

    (status, cache_control, body)
}

/// Severity label at the start of a probe body (after the newline prefix).
fn label_of(body: &str) -> &str {
    let rest = body.strip_prefix('\n').expect("newline-prefixed body");
    rest.split(' ').next().expect("label before first space")
}

#[tokio::test]
async fn liveness_always_returns_ok() {
    let (status, cache_control, body) = probe("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "\nOK");
    assert_eq!(cache_control.as_deref(), Some("no-store"));
}

#[tokio::test]
async fn disk_probe_reports_root_filesystem() {
    let (status, cache_control, body) = probe("/health/disk").await;

    assert_eq!(cache_control.as_deref(), Some("no-store"));
    assert!(body.contains(" - Free space: "), "body: {body:?}");
    assert!(body.contains("MB ("), "body: {body:?}");
    assert!(body.contains(" | Used: "), "body: {body:?}");
    assert!(body.ends_with('%'), "body: {body:?}");

    // The disk probe keeps HTTP 200 even when CRITICAL.
    match label_of(&body) {
        "OK" | "CRITICAL" => assert_eq!(status, StatusCode::OK),
        "WARNING" => assert_eq!(status, StatusCode::TOO_MANY_REQUESTS),
        other => panic!("unexpected label {other:?}"),
    }
}

#[tokio::test]
async fn cpu_probe_reports_load_and_cores() {
    let (status, cache_control, body) = probe("/health/cpu").await;

    assert_eq!(cache_control.as_deref(), Some("no-store"));
    assert!(body.contains("-Load average: "), "body: {body:?}");
    assert!(body.contains(" | Cores: "), "body: {body:?}");

    match label_of(&body) {
        "OK" => assert_eq!(status, StatusCode::OK),
        "WARNING" => assert_eq!(status, StatusCode::TOO_MANY_REQUESTS),
        "CRITICAL" => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("unexpected label {other:?}"),
    }
}

#[tokio::test]
async fn ram_probe_reports_virtual_memory() {
    let (status, cache_control, body) = probe("/health/ram").await;

    assert_eq!(cache_control.as_deref(), Some("no-store"));
    assert!(body.contains(" - Free space: "), "body: {body:?}");
    assert!(body.contains(" | Used: "), "body: {body:?}");

    match label_of(&body) {
        "OK" => assert_eq!(status, StatusCode::OK),
        "WARNING" => assert_eq!(status, StatusCode::TOO_MANY_REQUESTS),
        "CRITICAL" => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("unexpected label {other:?}"),
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _, _) = probe("/health/swap").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
