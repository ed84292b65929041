pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {services::orchestrator::Orchestrator, std::sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub publishable_key: Arc<str>,
    pub stripe_webhook_secret: Option<Arc<str>>,
}
