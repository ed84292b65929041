use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::CheckoutError;

/// Payment-intent identifier (`pi_xxx`).
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentIntentId(String);

impl PaymentIntentId {
    pub fn new(id: impl Into<String>) -> Result<Self, CheckoutError> {
        let id = id.into();
        if !id.starts_with("pi_") {
            return Err(CheckoutError::Validation(format!(
                "paymentIntentId must start with pi_, got: {id}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Customer identifier (`cus_xxx`).
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Result<Self, CheckoutError> {
        let id = id.into();
        if !id.starts_with("cus_") {
            return Err(CheckoutError::Processor(format!(
                "customer id must start with cus_, got: {id}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Payment method reference collected by the client SDK. Besides `pm_xxx`
/// the processor also accepts test tokens such as `pm_card_visa` and legacy
/// card ids, so only emptiness is rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodId(String);

impl PaymentMethodId {
    pub fn new(id: impl Into<String>) -> Result<Self, CheckoutError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CheckoutError::Validation(
                "paymentMethodId must not be empty".into(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
