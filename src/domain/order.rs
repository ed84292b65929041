use {
    super::error::CheckoutError,
    super::id::{PaymentIntentId, PaymentMethodId},
    super::money::Currency,
    serde::{Deserialize, Serialize},
};

/// Reference to a catalog product. The client never sends prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub items: Vec<ItemRef>,
    pub currency: Currency,
    pub payment_method_id: PaymentMethodId,
    pub is_saving_card: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub payment_intent_id: PaymentIntentId,
}

/// Body of `POST /pay`: either a new order or the second leg of an
/// authentication flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayRequest {
    Order(OrderRequest),
    Confirm(ConfirmRequest),
}

/// Wire shape before validation. Every field is optional so that a missing
/// field surfaces as a descriptive validation error instead of a serde one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayRequest {
    payment_intent_id: Option<String>,
    payment_method_id: Option<String>,
    items: Option<Vec<ItemRef>>,
    currency: Option<String>,
    is_saving_card: Option<bool>,
}

impl PayRequest {
    pub fn from_json(body: &str) -> Result<Self, CheckoutError> {
        let raw: RawPayRequest = serde_json::from_str(body)
            .map_err(|e| CheckoutError::Validation(format!("invalid request body: {e}")))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawPayRequest) -> Result<Self, CheckoutError> {
        // paymentIntentId selects the confirm branch; order fields are ignored.
        if let Some(id) = raw.payment_intent_id {
            return Ok(Self::Confirm(ConfirmRequest {
                payment_intent_id: PaymentIntentId::new(id)?,
            }));
        }

        let items = raw.items.ok_or_else(|| missing("items"))?;
        let currency = raw.currency.ok_or_else(|| missing("currency"))?;
        let payment_method_id = raw
            .payment_method_id
            .ok_or_else(|| missing("paymentMethodId"))?;

        Ok(Self::Order(OrderRequest {
            items,
            currency: Currency::try_from(currency.as_str())?,
            payment_method_id: PaymentMethodId::new(payment_method_id)?,
            is_saving_card: raw.is_saving_card.unwrap_or(false),
        }))
    }
}

/// Body of `POST /create-payment-intent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareRequest {
    pub items: Vec<ItemRef>,
    pub currency: Currency,
}

#[derive(Debug, Deserialize)]
struct RawPrepareRequest {
    items: Option<Vec<ItemRef>>,
    currency: Option<String>,
}

impl PrepareRequest {
    pub fn from_json(body: &str) -> Result<Self, CheckoutError> {
        let raw: RawPrepareRequest = serde_json::from_str(body)
            .map_err(|e| CheckoutError::Validation(format!("invalid request body: {e}")))?;
        let currency = raw.currency.ok_or_else(|| missing("currency"))?;
        Ok(Self {
            items: raw.items.ok_or_else(|| missing("items"))?,
            currency: Currency::try_from(currency.as_str())?,
        })
    }
}

fn missing(field: &str) -> CheckoutError {
    CheckoutError::Validation(format!("missing required field: {field}"))
}
