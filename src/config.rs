use {
    crate::{
        domain::error::CheckoutError,
        services::{catalog::PriceCatalog, orchestrator::DEFAULT_PROCESSOR_TIMEOUT},
    },
    std::{env, fmt, path::PathBuf, time::Duration},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4242";
const DEFAULT_STATIC_DIR: &str = "client";

/// Process configuration, read once at startup and injected from there.
#[derive(Clone)]
pub struct Config {
    pub stripe_secret_key: String,
    pub stripe_publishable_key: String,
    pub stripe_api_version: Option<String>,
    pub stripe_webhook_secret: Option<String>,
    pub static_dir: PathBuf,
    pub bind_addr: String,
    pub processor_timeout: Duration,
    pub catalog: PriceCatalog,
}

impl Config {
    pub fn from_env() -> Result<Self, CheckoutError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CheckoutError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require =
            |key: &str| get(key).ok_or_else(|| CheckoutError::Config(format!("{key} must be set")));

        let processor_timeout = match get("PROCESSOR_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    CheckoutError::Config(format!("PROCESSOR_TIMEOUT_SECS is not a number: {raw}"))
                })?;
                if secs == 0 {
                    return Err(CheckoutError::Config(
                        "PROCESSOR_TIMEOUT_SECS must be positive".into(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_PROCESSOR_TIMEOUT,
        };

        let catalog = match get("ITEM_PRICES") {
            Some(spec) => PriceCatalog::parse(&spec)?,
            None => PriceCatalog::default(),
        };

        Ok(Self {
            stripe_secret_key: require("STRIPE_SECRET_KEY")?,
            stripe_publishable_key: require("STRIPE_PUBLISHABLE_KEY")?,
            stripe_api_version: get("STRIPE_API_VERSION"),
            stripe_webhook_secret: get("STRIPE_WEBHOOK_SECRET"),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            processor_timeout,
            catalog,
        })
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("stripe_secret_key", &"<redacted>")
            .field("stripe_publishable_key", &self.stripe_publishable_key)
            .field("stripe_api_version", &self.stripe_api_version)
            .field(
                "stripe_webhook_secret",
                &self.stripe_webhook_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("static_dir", &self.static_dir)
            .field("bind_addr", &self.bind_addr)
            .field("processor_timeout", &self.processor_timeout)
            .field("catalog", &self.catalog)
            .finish()
    }
}
