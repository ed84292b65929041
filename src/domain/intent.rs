use {
    super::id::{CustomerId, PaymentIntentId, PaymentMethodId},
    super::money::{Currency, MoneyAmount},
    std::fmt,
};

/// Remote payment-intent status, collapsed to the cases the checkout flow
/// branches on. Legacy source-based statuses fold into their modern
/// equivalents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentStatus {
    RequiresAction,
    RequiresPaymentMethod,
    Succeeded,
    Other(String),
}

impl IntentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::RequiresAction => "requires_action",
            Self::RequiresPaymentMethod => "requires_payment_method",
            Self::Succeeded => "succeeded",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for IntentStatus {
    fn from(s: &str) -> Self {
        match s {
            "requires_action" | "requires_source_action" => Self::RequiresAction,
            "requires_payment_method" | "requires_source" => Self::RequiresPaymentMethod,
            "succeeded" => Self::Succeeded,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read view of a remote payment intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentRef {
    pub id: PaymentIntentId,
    pub status: IntentStatus,
    pub client_secret: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationMethod {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFutureUsage {
    OffSession,
}

/// Processor-neutral creation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentParams {
    pub amount: MoneyAmount,
    pub currency: Currency,
    pub payment_method: Option<PaymentMethodId>,
    pub customer: Option<CustomerId>,
    pub setup_future_usage: Option<SetupFutureUsage>,
    pub confirmation_method: ConfirmationMethod,
    pub confirm: bool,
}

impl IntentParams {
    /// Manually confirmed intent, confirmed in the same call.
    pub fn confirm_now(
        amount: MoneyAmount,
        currency: Currency,
        payment_method: PaymentMethodId,
    ) -> Self {
        Self {
            amount,
            currency,
            payment_method: Some(payment_method),
            customer: None,
            setup_future_usage: None,
            confirmation_method: ConfirmationMethod::Manual,
            confirm: true,
        }
    }

    /// Intent left for the client SDK to confirm.
    pub fn deferred(amount: MoneyAmount, currency: Currency, customer: CustomerId) -> Self {
        Self {
            amount,
            currency,
            payment_method: None,
            customer: Some(customer),
            setup_future_usage: None,
            confirmation_method: ConfirmationMethod::Automatic,
            confirm: false,
        }
    }

    /// Attach a customer so the payment method is saved for off-session use.
    pub fn save_for_customer(mut self, customer: CustomerId) -> Self {
        self.customer = Some(customer);
        self.setup_future_usage = Some(SetupFutureUsage::OffSession);
        self
    }
}
