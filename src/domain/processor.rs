use {
    super::error::CheckoutError,
    super::id::{CustomerId, PaymentIntentId},
    super::intent::{IntentParams, PaymentIntentRef},
    std::{future::Future, pin::Pin},
};

pub type ProcessorFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, CheckoutError>> + Send + 'a>>;

/// Remote payment processor. Every failure, including declines raised at
/// creation time, comes back as `CheckoutError::Processor`.
pub trait PaymentProcessor: Send + Sync {
    fn create_customer(&self) -> ProcessorFuture<'_, CustomerId>;

    fn create_payment_intent(&self, params: IntentParams) -> ProcessorFuture<'_, PaymentIntentRef>;

    fn confirm_payment_intent(&self, id: &PaymentIntentId) -> ProcessorFuture<'_, PaymentIntentRef>;
}
