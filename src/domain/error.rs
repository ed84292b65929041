use {std::time::Duration, thiserror::Error};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("{0}")]
    Processor(String),

    #[error("payment processor did not respond within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("webhook signature: {0}")]
    WebhookSignature(String),

    #[error("config: {0}")]
    Config(String),
}

impl CheckoutError {
    /// Whether the client may reasonably retry the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
