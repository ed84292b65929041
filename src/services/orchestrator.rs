use {
    super::catalog::PriceCatalog,
    crate::domain::{
        error::CheckoutError,
        intent::{IntentParams, PaymentIntentRef},
        money::MoneyAmount,
        order::{ConfirmRequest, ItemRef, OrderRequest, PayRequest, PrepareRequest},
        outcome::{Outcome, classify},
        processor::PaymentProcessor,
    },
    std::{future::Future, sync::Arc, time::Duration},
};

pub const DEFAULT_PROCESSOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Drives the processor through create → (authenticate) → confirm. Holds
/// no per-payment state; every call is independent.
pub struct Orchestrator {
    processor: Arc<dyn PaymentProcessor>,
    catalog: PriceCatalog,
    timeout: Duration,
}

impl Orchestrator {
    pub fn new(processor: Arc<dyn PaymentProcessor>, catalog: PriceCatalog) -> Self {
        Self {
            processor,
            catalog,
            timeout: DEFAULT_PROCESSOR_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn quote_price(&self, items: &[ItemRef]) -> Result<MoneyAmount, CheckoutError> {
        self.catalog.quote_price(items)
    }

    /// Create a manually confirmed intent and confirm it in the same call.
    /// When the card is being saved a customer is created first.
    #[tracing::instrument(
        skip_all,
        fields(currency = %order.currency, saving_card = order.is_saving_card)
    )]
    pub async fn create_and_attempt_payment(
        &self,
        order: &OrderRequest,
    ) -> Result<PaymentIntentRef, CheckoutError> {
        let amount = self.quote_price(&order.items)?;
        let mut params = IntentParams::confirm_now(
            amount,
            order.currency.clone(),
            order.payment_method_id.clone(),
        );

        if order.is_saving_card {
            let customer = self.processor.create_customer().await?;
            tracing::debug!(customer_id = %customer, "customer created for saved card");
            params = params.save_for_customer(customer);
        }

        let intent = self.processor.create_payment_intent(params).await?;
        tracing::info!(payment_intent_id = %intent.id, amount = %amount, status = %intent.status, "payment intent created");
        Ok(intent)
    }

    #[tracing::instrument(skip_all, fields(payment_intent_id = %request.payment_intent_id))]
    pub async fn confirm_payment(
        &self,
        request: &ConfirmRequest,
    ) -> Result<PaymentIntentRef, CheckoutError> {
        let intent = self
            .processor
            .confirm_payment_intent(&request.payment_intent_id)
            .await?;
        tracing::info!(status = %intent.status, "payment intent confirmed");
        Ok(intent)
    }

    /// Dispatch a decoded `/pay` request and classify the resulting intent.
    pub async fn pay(&self, request: &PayRequest) -> Result<Outcome, CheckoutError> {
        let intent = match request {
            PayRequest::Order(order) => {
                self.bounded(self.create_and_attempt_payment(order)).await?
            }
            PayRequest::Confirm(confirm) => self.bounded(self.confirm_payment(confirm)).await?,
        };

        let outcome = classify(&intent);
        let terminal = outcome.is_terminal();
        match &outcome {
            Outcome::Succeeded { .. } => {
                tracing::info!(payment_intent_id = %intent.id, terminal, "payment received")
            }
            Outcome::Denied { .. } => {
                tracing::info!(payment_intent_id = %intent.id, terminal, "card denied")
            }
            Outcome::RequiresAction { .. } => {
                tracing::info!(payment_intent_id = %intent.id, terminal, "authentication required")
            }
            Outcome::Error { message } => {
                tracing::warn!(payment_intent_id = %intent.id, terminal, "{message}")
            }
        }
        Ok(outcome)
    }

    /// Pre-create an intent for the client SDK to confirm itself.
    #[tracing::instrument(skip_all, fields(currency = %request.currency))]
    pub async fn prepare_payment(
        &self,
        request: &PrepareRequest,
    ) -> Result<PaymentIntentRef, CheckoutError> {
        let amount = self.quote_price(&request.items)?;
        self.bounded(async {
            let customer = self.processor.create_customer().await?;
            let params = IntentParams::deferred(amount, request.currency.clone(), customer);
            let intent = self.processor.create_payment_intent(params).await?;
            tracing::info!(payment_intent_id = %intent.id, amount = %amount, "payment intent prepared");
            Ok(intent)
        })
        .await
    }

    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, CheckoutError>>,
    ) -> Result<T, CheckoutError> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| CheckoutError::Timeout(self.timeout))?
    }
}
