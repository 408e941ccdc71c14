// ============================================================================
// HTTP API - actix-web adapter over the order command handler
// ============================================================================
//
//   GET    /orders            list
//   POST   /orders            create
//   GET    /orders/{orderId}  read
//   PUT    /orders/{orderId}  update
//   DELETE /orders/{orderId}  delete
//   GET    /health            liveness + store size
//   GET    /metrics           Prometheus text format (optional)
//
// Other methods on the order paths answer 405; unknown paths answer 404.
//
// ============================================================================

mod envelope;
mod error;
mod routes;

use actix_web::web;
use tokio::sync::Mutex;

use crate::domain::order::OrderCommandHandler;
use crate::metrics::{metrics_handler, Metrics};
use crate::store::{InMemoryOrderStore, UuidIdGenerator};

pub use routes::path_not_found;

pub type OrderService = OrderCommandHandler<InMemoryOrderStore, UuidIdGenerator>;

/// Shared application state. One lock covers a whole chain and its
/// operation, so concurrent requests never interleave check and mutation.
pub struct AppState {
    pub orders: Mutex<OrderService>,
    pub metrics: web::Data<Metrics>,
}

impl AppState {
    pub fn new(service: OrderService, metrics: web::Data<Metrics>) -> Self {
        Self {
            orders: Mutex::new(service),
            metrics,
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>, metrics_enabled: bool) {
    let metrics = state.metrics.clone();

    cfg.app_data(state)
        .app_data(metrics)
        .app_data(error::json_config())
        .service(
            web::resource("/orders")
                .route(web::get().to(routes::list_orders))
                .route(web::post().to(routes::create_order))
                .default_service(web::to(routes::method_not_allowed)),
        )
        .service(
            web::resource("/orders/{orderId}")
                .route(web::get().to(routes::read_order))
                .route(web::put().to(routes::update_order))
                .route(web::delete().to(routes::delete_order))
                .default_service(web::to(routes::method_not_allowed)),
        )
        .route("/health", web::get().to(routes::health));

    if metrics_enabled {
        cfg.route("/metrics", web::get().to(metrics_handler));
    }
}

// ============================================================================
// HTTP Tests
// ============================================================================
