use crate::domain::error::CheckoutError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Newtype over the domain error so axum can render it.
pub struct ApiError(pub CheckoutError);

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CheckoutError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CheckoutError::Processor(msg) => {
                tracing::warn!("payment processor error: {msg}");
                (StatusCode::FORBIDDEN, msg.clone())
            }
            err @ CheckoutError::Timeout(_) => {
                tracing::warn!(retryable = err.is_retryable(), "{err}");
                (StatusCode::FORBIDDEN, err.to_string())
            }
            CheckoutError::WebhookSignature(msg) => {
                tracing::warn!("rejected webhook: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    "invalid webhook signature".to_string(),
                )
            }
            CheckoutError::Serialization(err) => {
                (StatusCode::BAD_REQUEST, format!("invalid payload: {err}"))
            }
            CheckoutError::Config(msg) => {
                tracing::error!("configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
