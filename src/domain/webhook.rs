/// What a verified processor event means to this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookNotice {
    PaymentMethodAttached,
    PaymentSucceeded { saved_card: bool },
    PaymentFailed,
    Ignored(String),
}

impl WebhookNotice {
    /// `saved_card` is only consulted for `payment_intent.succeeded`.
    pub fn from_event(event_type: &str, saved_card: bool) -> Self {
        match event_type {
            "payment_method.attached" => Self::PaymentMethodAttached,
            "payment_intent.succeeded" => Self::PaymentSucceeded { saved_card },
            "payment_intent.payment_failed" => Self::PaymentFailed,
            other => Self::Ignored(other.to_string()),
        }
    }
}
