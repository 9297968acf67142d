//! Symptom triage HTTP server.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use symptom_triage::adapters::catalog::YamlCatalogLoader;
use symptom_triage::adapters::http::{app_router, QuestionnaireAppState};
use symptom_triage::adapters::ids::UuidSessionIdGenerator;
use symptom_triage::adapters::storage::InMemorySessionRegistry;
use symptom_triage::config::AppConfig;
use symptom_triage::domain::catalog::TemplateCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let catalog = match &config.catalog.path {
        Some(path) => Arc::new(YamlCatalogLoader::load(path).await?),
        None => {
            tracing::info!("Using built-in question catalog");
            TemplateCatalog::builtin()
        }
    };

    let state = QuestionnaireAppState::new(
        catalog,
        Arc::new(InMemorySessionRegistry::new()),
        Arc::new(UuidSessionIdGenerator),
    );
    let app = app_router(state, &config.server)?;

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Symptom triage server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
