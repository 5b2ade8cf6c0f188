//! Centralized error rendering.

use std::any::Any;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

use crate::error::{ApiError, RecordedError};
use crate::model::ErrorBody;

/// Render the failure a handler recorded, if any.
///
/// A response carrying a [`RecordedError`] is replaced by exactly one
/// `{"error": message}` body with the mapped status. Any other response is
/// passed through untouched.
pub async fn handle_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;
    let recorded = response.extensions_mut().remove::<RecordedError>();
    let Some(RecordedError(err)) = recorded else {
        return response;
    };

    let status = err.status_code();
    if status.is_server_error() {
        error!(%method, %path, status = status.as_u16(), error = %err, "request failed");
    } else {
        debug!(%method, %path, status = status.as_u16(), error = %err, "request rejected");
    }

    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}

/// Turn a handler panic into a recorded 500 for [`handle_errors`] to render.
///
/// The panic payload is logged, never sent to the client.
pub fn render_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(panic = detail, "handler panicked");
    ApiError::Unclassified("internal server error".into()).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use blog_store::StoreError;
    use tower::util::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/ok", get(|| async { (StatusCode::ACCEPTED, "fine") }))
            .route(
                "/tagged",
                get(|| async { ApiError::with_status(StatusCode::CONFLICT, "taken") }),
            )
            .route(
                "/missing",
                get(|| async { ApiError::from(StoreError::NotFound(1)) }),
            )
            .route(
                "/broken",
                get(|| async { ApiError::Unclassified("DB error".into()) }),
            )
            .layer(axum::middleware::from_fn(handle_errors))
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        assert!(response.extensions().get::<RecordedError>().is_none());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert_eq!(call("/ok").await, (StatusCode::ACCEPTED, "fine".into()));
    }

    #[tokio::test]
    async fn tagged_status_is_used() {
        assert_eq!(
            call("/tagged").await,
            (StatusCode::CONFLICT, r#"{"error":"taken"}"#.into())
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        assert_eq!(
            call("/missing").await,
            (StatusCode::NOT_FOUND, r#"{"error":"post not found"}"#.into())
        );
    }

    #[tokio::test]
    async fn other_failures_map_to_500() {
        assert_eq!(
            call("/broken").await,
            (StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"DB error"}"#.into())
        );
    }

    #[test]
    fn render_panic_records_generic_failure() {
        let response = render_panic(Box::new("secret detail"));
        let RecordedError(err) = response.extensions().get::<RecordedError>().unwrap().clone();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal server error");
    }
}
