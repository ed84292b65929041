pub mod webhook;

use crate::domain::{
    error::CheckoutError,
    id::PaymentIntentId,
    intent::{ConfirmationMethod, IntentStatus, PaymentIntentRef, SetupFutureUsage},
    money::Currency,
};

// ── Conversion helpers ──────────────────────────────────────────────────────

/// Stripe's own currency list decides what is accepted. Codes it does not
/// know are reported as a processor rejection, not a client data error.
pub fn convert_currency(c: &Currency) -> Result<stripe::Currency, CheckoutError> {
    serde_json::from_value(serde_json::Value::String(c.as_str().to_string()))
        .map_err(|_| CheckoutError::Processor(format!("unsupported currency: {c}")))
}

pub fn convert_confirmation_method(m: ConfirmationMethod) -> stripe::PaymentIntentConfirmationMethod {
    match m {
        ConfirmationMethod::Automatic => stripe::PaymentIntentConfirmationMethod::Automatic,
        ConfirmationMethod::Manual => stripe::PaymentIntentConfirmationMethod::Manual,
    }
}

pub fn convert_setup_future_usage(u: SetupFutureUsage) -> stripe::PaymentIntentSetupFutureUsage {
    match u {
        SetupFutureUsage::OffSession => stripe::PaymentIntentSetupFutureUsage::OffSession,
    }
}

pub fn intent_ref(pi: &stripe::PaymentIntent) -> Result<PaymentIntentRef, CheckoutError> {
    let id = PaymentIntentId::new(pi.id.to_string())
        .map_err(|e| CheckoutError::Processor(e.to_string()))?;
    let client_secret = pi.client_secret.clone().ok_or_else(|| {
        CheckoutError::Processor(format!("payment intent {id} has no client secret"))
    })?;

    Ok(PaymentIntentRef {
        id,
        status: IntentStatus::from(pi.status.as_str()),
        client_secret,
    })
}

/// Prefer the processor's own message (e.g. "Your card was declined.") so
/// the client can show it as-is.
pub fn processor_error(err: stripe::StripeError) -> CheckoutError {
    match err {
        stripe::StripeError::Stripe(req) => CheckoutError::Processor(
            req.message
                .unwrap_or_else(|| format!("payment processor returned HTTP {}", req.http_status)),
        ),
        other => CheckoutError::Processor(format!("payment processor unavailable: {other}")),
    }
}
