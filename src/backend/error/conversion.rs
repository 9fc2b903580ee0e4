/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses so handlers can
 * return `Result<_, BackendError>` and let Axum do the rest.
 *
 * # Response Format
 *
 * Error responses are plain text: the status code carries the category and
 * the body carries the human-readable reason, e.g.
 *
 * ```text
 * HTTP/1.1 400 Bad Request
 * Content-Type: text/plain; charset=utf-8
 *
 * Failed to load architecture: invalid scene: fog: far is less than 10
 * ```
 */

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("[Architectures] {} ({})", message, status);
        } else {
            tracing::warn!("[Architectures] {} ({})", message, status);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_error_response_is_plain_text() {
        let response = BackendError::not_found("abc").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Architecture not found");
    }

    #[tokio::test]
    async fn test_method_not_allowed_response() {
        let response = BackendError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Method not allowed");
    }
}
