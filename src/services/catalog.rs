use {
    crate::domain::{error::CheckoutError, money::MoneyAmount, order::ItemRef},
    std::collections::HashMap,
};

/// Charge used when no per-item prices are configured.
pub const DEFAULT_ORDER_AMOUNT: u32 = 1400;

/// Server-side source of truth for what an order costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceCatalog {
    /// Every order costs the same, whatever it contains.
    Flat(MoneyAmount),
    Itemized(HashMap<String, MoneyAmount>),
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::Flat(MoneyAmount::from(DEFAULT_ORDER_AMOUNT))
    }
}

impl PriceCatalog {
    pub fn itemized<I, S>(prices: I) -> Self
    where
        I: IntoIterator<Item = (S, MoneyAmount)>,
        S: Into<String>,
    {
        Self::Itemized(prices.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Parse `id=cents,id=cents`.
    pub fn parse(spec: &str) -> Result<Self, CheckoutError> {
        let mut prices = HashMap::new();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (id, cents) = entry.split_once('=').ok_or_else(|| {
                CheckoutError::Config(format!("price entry must be id=cents, got: {entry}"))
            })?;
            let cents: i64 = cents.trim().parse().map_err(|_| {
                CheckoutError::Config(format!("invalid price for {}: {cents}", id.trim()))
            })?;
            let amount =
                MoneyAmount::new(cents).map_err(|e| CheckoutError::Config(e.to_string()))?;
            prices.insert(id.trim().to_string(), amount);
        }
        if prices.is_empty() {
            return Err(CheckoutError::Config("price list is empty".into()));
        }
        Ok(Self::Itemized(prices))
    }

    /// Amount to charge for `items`. Client-supplied amounts are never
    /// consulted.
    pub fn quote_price(&self, items: &[ItemRef]) -> Result<MoneyAmount, CheckoutError> {
        match self {
            Self::Flat(amount) => Ok(*amount),
            Self::Itemized(prices) => {
                if items.is_empty() {
                    return Err(CheckoutError::Validation("order has no items".into()));
                }
                let mut total = MoneyAmount::from(0u32);
                for item in items {
                    let price = prices.get(&item.id).ok_or_else(|| {
                        CheckoutError::Validation(format!("unknown item: {}", item.id))
                    })?;
                    total = total.checked_add(*price).ok_or_else(|| {
                        CheckoutError::Validation("order total overflows".into())
                    })?;
                }
                Ok(total)
            }
        }
    }
}
