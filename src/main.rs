use {
    card_checkout::{
        AppState,
        adapters::{http, stripe_client::StripeProcessor},
        config::Config,
        services::orchestrator::Orchestrator,
    },
    std::sync::Arc,
    tokio::signal,
    tower_http::services::ServeDir,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("invalid configuration");
    tracing::debug!(?config, "configuration loaded");

    if let Some(version) = &config.stripe_api_version {
        tracing::info!(
            requested = %version,
            "STRIPE_API_VERSION is informational; requests use the SDK's pinned API version"
        );
    }
    if config.stripe_webhook_secret.is_none() {
        tracing::warn!("STRIPE_WEBHOOK_SECRET not set, /webhook disabled");
    }

    let processor = Arc::new(StripeProcessor::new(&config.stripe_secret_key));
    let orchestrator =
        Orchestrator::new(processor, config.catalog.clone()).with_timeout(config.processor_timeout);

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        publishable_key: config.stripe_publishable_key.as_str().into(),
        stripe_webhook_secret: config.stripe_webhook_secret.as_deref().map(Into::into),
    };

    let app = http::router(state).fallback_service(ServeDir::new(&config.static_dir));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap();
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
