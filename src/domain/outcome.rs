use super::intent::{IntentStatus, PaymentIntentRef};

pub const CARD_DENIED_MESSAGE: &str = "Your card was denied, please provide a new payment method";

/// Normalized result of a `/pay` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Client must complete authentication, then confirm with the same id.
    RequiresAction {
        payment_intent_id: String,
        client_secret: String,
    },
    Denied {
        message: String,
    },
    Succeeded {
        client_secret: String,
    },
    Error {
        message: String,
    },
}

impl Outcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::RequiresAction { .. })
    }

    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::RequiresAction {
                payment_intent_id,
                client_secret,
            } => serde_json::json!({
                "requiresAction": true,
                "paymentIntentId": payment_intent_id,
                "clientSecret": client_secret,
            }),
            Self::Succeeded { client_secret } => serde_json::json!({
                "clientSecret": client_secret,
            }),
            Self::Denied { message } | Self::Error { message } => serde_json::json!({
                "error": message,
            }),
        }
    }
}

/// Map a payment intent's status to what the client should do next.
pub fn classify(intent: &PaymentIntentRef) -> Outcome {
    match &intent.status {
        IntentStatus::RequiresAction => Outcome::RequiresAction {
            payment_intent_id: intent.id.to_string(),
            client_secret: intent.client_secret.clone(),
        },
        IntentStatus::RequiresPaymentMethod => Outcome::Denied {
            message: CARD_DENIED_MESSAGE.to_string(),
        },
        IntentStatus::Succeeded => Outcome::Succeeded {
            client_secret: intent.client_secret.clone(),
        },
        IntentStatus::Other(status) => {
            Outcome::error(format!("unexpected payment intent status: {status}"))
        }
    }
}
