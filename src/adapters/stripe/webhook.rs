use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{error::CheckoutError, webhook::WebhookNotice},
    },
    axum::{Json, extract::State, http::HeaderMap},
};

#[tracing::instrument(
    name = "webhook",
    skip_all,
    fields(event_id = tracing::field::Empty, event_type = tracing::field::Empty)
)]
pub async fn wh_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<serde_json::Value>, ApiError> {
    let secret = state
        .stripe_webhook_secret
        .as_deref()
        .ok_or_else(|| CheckoutError::Config("STRIPE_WEBHOOK_SECRET is not set".into()))?;

    let sig = headers
        .get("Stripe-Signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| CheckoutError::WebhookSignature("missing Stripe-Signature header".into()))?;

    let event = stripe::Webhook::construct_event(&body, sig, secret)
        .map_err(|e| CheckoutError::WebhookSignature(e.to_string()))?;

    let event_id = event.id.to_string();
    let raw_event: serde_json::Value = serde_json::from_str(&body).map_err(CheckoutError::from)?;
    let event_type = raw_event
        .get("type")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();

    tracing::Span::current()
        .record("event_id", tracing::field::display(&event_id))
        .record("event_type", tracing::field::display(&event_type));

    let saved_card = match event.data.object {
        stripe::EventObject::PaymentIntent(ref pi) => pi.setup_future_usage.is_some(),
        _ => false,
    };

    match WebhookNotice::from_event(&event_type, saved_card) {
        WebhookNotice::PaymentMethodAttached => {
            tracing::info!("payment method attached to customer");
        }
        WebhookNotice::PaymentSucceeded { saved_card } => {
            if !saved_card {
                tracing::info!("customer did not save the card");
            }
            tracing::info!("payment received");
        }
        WebhookNotice::PaymentFailed => {
            tracing::warn!("payment failed");
        }
        WebhookNotice::Ignored(_) => {
            tracing::debug!("unhandled event type");
        }
    }

    Ok(Json(serde_json::json!({"status": "success"})))
}
