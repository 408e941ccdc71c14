use actix_web::{middleware, web, App, HttpServer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod metrics;
mod store;

use api::AppState;
use config::ServerConfig;
use domain::order::OrderCommandHandler;
use store::{InMemoryOrderStore, OrderStore, UuidIdGenerator};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, default INFO; override with RUST_LOG
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,orders_api=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(?config, "Starting orders API");

    // === 1. Order store (optionally seeded) ===
    let store = match &config.seed_file {
        Some(path) => store::load_seed(path)?,
        None => InMemoryOrderStore::new(),
    };
    let initial_orders = store.len();

    // === 2. Prometheus metrics ===
    let metrics = web::Data::new(metrics::Metrics::new()?);
    metrics.set_orders_stored(initial_orders);
    tracing::info!(
        "📊 Metrics registry created with {} metrics",
        metrics.registry().gather().len()
    );

    // === 3. Shared handler state ===
    let service = OrderCommandHandler::new(store, UuidIdGenerator);
    let state = web::Data::new(AppState::new(service, metrics));

    // === 4. HTTP server ===
    let metrics_enabled = config.metrics_enabled;
    tracing::info!(
        "🚀 Listening on http://{}:{} ({} orders loaded)",
        config.host,
        config.port,
        initial_orders
    );

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(middleware::Logger::default())
            .configure(move |cfg| api::configure(cfg, state, metrics_enabled))
            .default_service(web::to(api::path_not_found))
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
