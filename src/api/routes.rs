use std::time::Instant;

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;

use super::envelope::{DataEnvelope, RequestEnvelope};
use super::error::ApiError;
use super::AppState;
use crate::domain::order::{OrderCommand, OrderError, OrderOutcome};
use crate::store::OrderStore;

/// Run one command under the store lock and record how it went.
async fn dispatch(state: &AppState, command: OrderCommand) -> Result<OrderOutcome, OrderError> {
    let operation = command.operation();
    let started = Instant::now();

    let result = {
        let mut orders = state.orders.lock().await;
        let result = orders.handle(command);
        state.metrics.set_orders_stored(orders.store().len());
        result
    };

    state.metrics.record_request(
        operation,
        started.elapsed().as_secs_f64(),
        result.as_ref().err().map(OrderError::kind),
    );

    result
}

fn respond(outcome: OrderOutcome) -> HttpResponse {
    match outcome {
        OrderOutcome::Created(order) => HttpResponse::Created().json(DataEnvelope::new(order)),
        OrderOutcome::Found(order) | OrderOutcome::Updated(order) => {
            HttpResponse::Ok().json(DataEnvelope::new(order))
        }
        OrderOutcome::Deleted => HttpResponse::NoContent().finish(),
        OrderOutcome::Listed(orders) => HttpResponse::Ok().json(DataEnvelope::new(orders)),
    }
}

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, OrderError> {
    let outcome = dispatch(&state, OrderCommand::List).await?;
    Ok(respond(outcome))
}

pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, OrderError> {
    let payload = body.into_inner().into_payload();
    let outcome = dispatch(&state, OrderCommand::Create { payload }).await?;
    Ok(respond(outcome))
}

pub async fn read_order(
    state: web::Data<AppState>,
    order_id: web::Path<String>,
) -> Result<HttpResponse, OrderError> {
    let order_id = order_id.into_inner();
    let outcome = dispatch(&state, OrderCommand::Read { order_id }).await?;
    Ok(respond(outcome))
}

pub async fn update_order(
    state: web::Data<AppState>,
    order_id: web::Path<String>,
    body: web::Json<RequestEnvelope>,
) -> Result<HttpResponse, OrderError> {
    let command = OrderCommand::Update {
        order_id: order_id.into_inner(),
        payload: body.into_inner().into_payload(),
    };
    let outcome = dispatch(&state, command).await?;
    Ok(respond(outcome))
}

pub async fn delete_order(
    state: web::Data<AppState>,
    order_id: web::Path<String>,
) -> Result<HttpResponse, OrderError> {
    let order_id = order_id.into_inner();
    let outcome = dispatch(&state, OrderCommand::Delete { order_id }).await?;
    Ok(respond(outcome))
}

pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let orders = state.orders.lock().await.store().len();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "orders-api",
        "orders": orders,
        "check_time": Utc::now(),
    }))
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}

pub async fn path_not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::PathNotFound(req.path().to_string()))
}
