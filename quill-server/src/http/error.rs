//! API error type with IntoResponse
//!
//! Every failure in this server is a 500 whose body is the error text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;
use crate::templates::TemplateError;

/// Request failure, recovered into a response
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("invalid form: {0}")]
    Form(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match &self {
            Self::Store(e) => tracing::error!("Store error: {}", e),
            Self::Template(e) => tracing::error!("Template error: {}", e),
            Self::Form(e) => tracing::error!("Form error: {}", e),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_is_500_with_text() {
        let err = ApiError::from(StoreError::NotFound {
            resource: "user",
            key: "any".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"user not found: any");
    }

    #[tokio::test]
    async fn form_error_is_500_with_text() {
        let response = ApiError::Form("bad boundary".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"invalid form: bad boundary");
    }

    #[tokio::test]
    async fn conflict_is_500() {
        let response = ApiError::from(StoreError::Conflict("dup".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
