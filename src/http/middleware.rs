//! Correlation propagation middleware.
//!
//! # Responsibilities
//! - Establish an isolated correlation scope per request
//! - Decode inbound `X-Correlation-ID` values into the scoped store
//! - Encode the final store state into the outbound response header
//!
//! # Design Decisions
//! - A request without the header gets a generated id and an
//!   informational log entry, never an error response
//! - Each request's scope is created fresh; nothing carries over between
//!   requests handled on the same connection

use axum::extract::Request;
use axum::http::header::HeaderName;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::context::store;
use crate::context::CorrelationContext;
use crate::headers::codec;
use crate::logging::{codes, runtime};

/// Header carrying correlation tokens in both directions.
pub static CORRELATION_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

/// Axum middleware threading the correlation context across one request.
pub async fn propagate_correlation(request: Request, next: Next) -> Response {
    let raw_values: Vec<String> = request
        .headers()
        .get_all(&CORRELATION_HEADER)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(|value| value.to_string())
        .collect();

    store::scope(CorrelationContext::default(), async move {
        if raw_values.is_empty() {
            runtime::get_logger("http.middleware").info(codes::MDAL_NO_CORRID, &[]);
            store::init_headers();
        } else {
            store::set_headers(&raw_values);
        }

        let mut response = next.run(request).await;

        let header_value = codec::join(&store::get_headers());
        if let Ok(value) = HeaderValue::from_str(&header_value) {
            response.headers_mut().insert(&CORRELATION_HEADER, value);
        }
        response
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .route(
                "/attr",
                get(|| async {
                    store::add_attr("handled:1");
                    "ok"
                }),
            )
            .layer(axum::middleware::from_fn(propagate_correlation))
    }

    fn header_of(response: &Response) -> String {
        response
            .headers()
            .get(&CORRELATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[tokio::test]
    async fn test_inbound_header_round_trips() {
        let request = HttpRequest::builder()
            .uri("/")
            .header("X-Correlation-ID", "corrid:cid1,attr:a:1")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(header_of(&response), "corrid:cid1,attr:a:1");
    }

    #[tokio::test]
    async fn test_absent_header_generates_id() {
        let request = HttpRequest::builder().uri("/").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();
        let header = header_of(&response);
        assert!(header.starts_with("corrid:"));
        assert!(header.len() > "corrid:".len());
    }

    #[tokio::test]
    async fn test_handler_attributes_reach_response_header() {
        let request = HttpRequest::builder()
            .uri("/attr")
            .header("X-Correlation-ID", "corrid:cid1")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(header_of(&response), "corrid:cid1,attr:handled:1");
    }

    #[tokio::test]
    async fn test_malformed_header_yields_fresh_session() {
        let request = HttpRequest::builder()
            .uri("/")
            .header("X-Correlation-ID", "garbage,attr-without-label")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let header = header_of(&response);
        assert!(header.starts_with("corrid:"));
        assert!(!header.contains("garbage"));
    }
}
