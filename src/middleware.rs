//! Request ID middleware for correlating logs with probe requests.
//!
//! Generates a UUID v4 for each incoming request and wraps the request
//! lifecycle in a tracing span carrying the request ID, method, and path.
//! The completion log records the response status, so degraded probe
//! results can be matched to scraper activity after the fact.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Extension type for accessing the request ID in handlers if needed.
/// The inner Uuid can be extracted from request extensions when needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that assigns a request ID and creates a request span.
///
/// Installed as the outermost layer so the span covers the header layers
/// and the probe handlers alike.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "probe_request",
        request_id = %request_id,
        method = %method,
        path = %path,
        status = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("status", response.status().as_u16());
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Probe request completed"
        );

        response
    }
    .instrument(span)
    .await
}
