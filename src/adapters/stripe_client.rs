use {
    super::stripe::{
        convert_confirmation_method, convert_currency, convert_setup_future_usage, intent_ref,
        processor_error,
    },
    crate::domain::{
        error::CheckoutError,
        id::{CustomerId, PaymentIntentId},
        intent::{IntentParams, PaymentIntentRef},
        processor::{PaymentProcessor, ProcessorFuture},
    },
};

pub struct StripeProcessor {
    client: stripe::Client,
}

impl StripeProcessor {
    pub fn new(secret_key: &str) -> Self {
        let client = stripe::Client::new(secret_key).with_app_info(
            env!("CARGO_PKG_NAME").to_string(),
            Some(env!("CARGO_PKG_VERSION").to_string()),
            None,
        );
        Self { client }
    }
}

impl PaymentProcessor for StripeProcessor {
    fn create_customer(&self) -> ProcessorFuture<'_, CustomerId> {
        Box::pin(async move { self.create_customer_inner().await })
    }

    fn create_payment_intent(&self, params: IntentParams) -> ProcessorFuture<'_, PaymentIntentRef> {
        Box::pin(async move { self.create_payment_intent_inner(params).await })
    }

    fn confirm_payment_intent(&self, id: &PaymentIntentId) -> ProcessorFuture<'_, PaymentIntentRef> {
        let id = id.clone();
        Box::pin(async move { self.confirm_payment_intent_inner(&id).await })
    }
}

impl StripeProcessor {
    async fn create_customer_inner(&self) -> Result<CustomerId, CheckoutError> {
        let customer = stripe::Customer::create(&self.client, stripe::CreateCustomer::new())
            .await
            .map_err(processor_error)?;
        CustomerId::new(customer.id.to_string())
    }

    async fn create_payment_intent_inner(
        &self,
        params: IntentParams,
    ) -> Result<PaymentIntentRef, CheckoutError> {
        let payment_method = params
            .payment_method
            .as_ref()
            .map(|pm| {
                pm.as_str()
                    .parse::<stripe::PaymentMethodId>()
                    .map_err(|e| CheckoutError::Validation(format!("invalid paymentMethodId: {e}")))
            })
            .transpose()?;
        let customer = params
            .customer
            .as_ref()
            .map(|c| {
                c.as_str()
                    .parse::<stripe::CustomerId>()
                    .map_err(|e| CheckoutError::Processor(format!("invalid customer id: {e}")))
            })
            .transpose()?;

        let currency = convert_currency(&params.currency)?;
        let mut create = stripe::CreatePaymentIntent::new(params.amount.cents(), currency);
        create.payment_method = payment_method;
        create.customer = customer;
        create.confirmation_method = Some(convert_confirmation_method(params.confirmation_method));
        create.confirm = Some(params.confirm);
        create.setup_future_usage = params.setup_future_usage.map(convert_setup_future_usage);

        let pi = stripe::PaymentIntent::create(&self.client, create)
            .await
            .map_err(processor_error)?;
        intent_ref(&pi)
    }

    async fn confirm_payment_intent_inner(
        &self,
        id: &PaymentIntentId,
    ) -> Result<PaymentIntentRef, CheckoutError> {
        let pi = stripe::PaymentIntent::confirm(
            &self.client,
            id.as_str(),
            stripe::PaymentIntentConfirmParams::default(),
        )
        .await
        .map_err(processor_error)?;
        intent_ref(&pi)
    }
}
