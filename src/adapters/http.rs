use {
    crate::{
        AppState,
        adapters::{api_errors::ApiError, stripe::webhook::wh_handler},
        domain::{
            error::CheckoutError,
            order::{PayRequest, PrepareRequest},
            outcome::Outcome,
        },
    },
    axum::{
        Json, Router,
        extract::{DefaultBodyLimit, State},
        http::StatusCode,
        middleware,
        response::{IntoResponse, Response},
        routing::{get, post},
    },
    std::time::Duration,
    tower_http::{timeout::TimeoutLayer, trace::TraceLayer},
    uuid::Uuid,
};

/// Headroom on top of the processor timeout before the whole request is cut.
const REQUEST_TIMEOUT_SLACK: Duration = Duration::from_secs(5);

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        // Business outcomes are 200; only the error outcome is an HTTP failure.
        let status = match self {
            Outcome::Error { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::OK,
        };
        (status, Json(self.body())).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let request_timeout = state.orchestrator.timeout() + REQUEST_TIMEOUT_SLACK;

    let mut app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/stripe-key", get(stripe_key))
        .route("/pay", post(pay))
        .route("/create-payment-intent", post(create_payment_intent));

    if state.stripe_webhook_secret.is_some() {
        app = app.route("/webhook", post(wh_handler));
    }

    let app = app.layer(DefaultBodyLimit::max(64 * 1024));
    with_request_timeout(app, request_timeout)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Cut requests that outlive `timeout`. The layer's bare 408 is rewritten
/// into the same `{error}` body a processor timeout produces.
fn with_request_timeout<S>(app: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    app.layer(TimeoutLayer::new(timeout))
        .layer(middleware::map_response(move |response: Response| async move {
            if response.status() == StatusCode::REQUEST_TIMEOUT {
                ApiError(CheckoutError::Timeout(timeout)).into_response()
            } else {
                response
            }
        }))
}

pub async fn stripe_key(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "publicKey": &*state.publishable_key }))
}

#[tracing::instrument(name = "pay", skip_all, fields(request_id = %Uuid::now_v7()))]
pub async fn pay(State(state): State<AppState>, body: String) -> Result<Outcome, ApiError> {
    let request = PayRequest::from_json(&body)?;
    let outcome = state.orchestrator.pay(&request).await?;
    Ok(outcome)
}

#[tracing::instrument(name = "create_payment_intent", skip_all, fields(request_id = %Uuid::now_v7()))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = PrepareRequest::from_json(&body)?;
    let intent = state.orchestrator.prepare_payment(&request).await?;
    Ok(Json(serde_json::json!({
        "publicKey": &*state.publishable_key,
        "clientSecret": intent.client_secret,
        "id": intent.id,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test(start_paused = true)]
    async fn request_timeout_renders_json_error() {
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                "late"
            }),
        );
        let app = with_request_timeout(slow, Duration::from_secs(1));

        let response = app
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "payment processor did not respond within 1s"})
        );
    }

    #[tokio::test]
    async fn fast_requests_pass_through_timeout() {
        let app = with_request_timeout(
            Router::new().route("/fast", get(|| async { "ok" })),
            Duration::from_secs(1),
        );

        let response = app
            .oneshot(Request::get("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
