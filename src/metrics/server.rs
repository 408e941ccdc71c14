use actix_web::{web, HttpResponse};

use super::Metrics;

/// `GET /metrics` in the Prometheus text exposition format.
pub async fn metrics_handler(metrics: web::Data<Metrics>) -> HttpResponse {
    match metrics.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            tracing::error!("Metrics encoding error: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
