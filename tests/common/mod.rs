#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use card_checkout::AppState;
use card_checkout::domain::error::CheckoutError;
use card_checkout::domain::id::{CustomerId, PaymentIntentId};
use card_checkout::domain::intent::{IntentParams, IntentStatus, PaymentIntentRef};
use card_checkout::domain::processor::{PaymentProcessor, ProcessorFuture};
use card_checkout::services::catalog::PriceCatalog;
use card_checkout::services::orchestrator::Orchestrator;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub const PUBLISHABLE_KEY: &str = "pk_test_123";
pub const WEBHOOK_SECRET: &str = "whsec_test_123";
pub const STUB_CUSTOMER: &str = "cus_stub";

/// One recorded processor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateCustomer,
    CreateIntent(IntentParams),
    Confirm(String),
}

enum Reply {
    Intent {
        id: String,
        status: String,
        client_secret: String,
    },
    Fail(String),
}

/// In-memory processor that records every call and answers with a canned
/// intent (or failure).
pub struct StubProcessor {
    calls: Mutex<Vec<Call>>,
    reply: Reply,
    delay: Option<Duration>,
}

impl StubProcessor {
    pub fn returning(status: &str, id: &str, client_secret: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Intent {
                id: id.into(),
                status: status.into(),
                client_secret: client_secret.into(),
            },
            delay: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Fail(message.into()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn answer(&self) -> Result<PaymentIntentRef, CheckoutError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Reply::Intent {
                id,
                status,
                client_secret,
            } => Ok(PaymentIntentRef {
                id: PaymentIntentId::new(id.clone())?,
                status: IntentStatus::from(status.as_str()),
                client_secret: client_secret.clone(),
            }),
            Reply::Fail(msg) => Err(CheckoutError::Processor(msg.clone())),
        }
    }
}

impl PaymentProcessor for StubProcessor {
    fn create_customer(&self) -> ProcessorFuture<'_, CustomerId> {
        self.record(Call::CreateCustomer);
        Box::pin(async move { CustomerId::new(STUB_CUSTOMER) })
    }

    fn create_payment_intent(&self, params: IntentParams) -> ProcessorFuture<'_, PaymentIntentRef> {
        self.record(Call::CreateIntent(params));
        Box::pin(self.answer())
    }

    fn confirm_payment_intent(&self, id: &PaymentIntentId) -> ProcessorFuture<'_, PaymentIntentRef> {
        self.record(Call::Confirm(id.to_string()));
        Box::pin(self.answer())
    }
}

pub fn orchestrator(stub: Arc<StubProcessor>) -> Orchestrator {
    Orchestrator::new(stub, PriceCatalog::default()).with_timeout(Duration::from_secs(2))
}

pub fn state(stub: Arc<StubProcessor>, webhook_secret: Option<&str>) -> AppState {
    AppState {
        orchestrator: Arc::new(orchestrator(stub)),
        publishable_key: PUBLISHABLE_KEY.into(),
        stripe_webhook_secret: webhook_secret.map(Into::into),
    }
}

pub fn app(stub: Arc<StubProcessor>) -> Router {
    card_checkout::adapters::http::router(state(stub, Some(WEBHOOK_SECRET)))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&body).into()))
    };
    (status, json)
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub fn order_body(is_saving_card: bool) -> String {
    serde_json::json!({
        "items": [{"id": "photo-subscription"}],
        "currency": "usd",
        "paymentMethodId": "pm_card_visa",
        "isSavingCard": is_saving_card,
    })
    .to_string()
}
