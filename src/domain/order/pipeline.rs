use serde_json::Value;

use crate::store::OrderStore;

use super::commands::OrderPayload;
use super::errors::OrderError;
use super::guard;
use super::validation::{self, ValidatedOrder};
use super::value_objects::OrderStatus;

// ============================================================================
// Validation Pipeline
// ============================================================================
//
// One chain per operation. Checks run in a fixed order and the first failure
// ends the chain; its error is the only one reported. A chain that passes
// hands its typed result to the matching resource operation.
//
//   create: content
//   read:   exists
//   update: exists -> content -> id matches route -> status
//   delete: exists -> pending
//   list:   (none)
//
// ============================================================================

/// Everything an update needs once its chain has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedUpdate {
    pub index: usize,
    pub order: ValidatedOrder,
    pub status: OrderStatus,
}

pub fn check_create(payload: &OrderPayload) -> Result<ValidatedOrder, OrderError> {
    validation::validate_content(payload)
}

pub fn check_read<S>(store: &S, order_id: &str) -> Result<usize, OrderError>
where
    S: OrderStore + ?Sized,
{
    order_exists(store, order_id)
}

pub fn check_update<S>(
    store: &S,
    order_id: &str,
    payload: &OrderPayload,
) -> Result<CheckedUpdate, OrderError>
where
    S: OrderStore + ?Sized,
{
    let index = order_exists(store, order_id)?;
    let order = validation::validate_content(payload)?;
    id_matches_route(payload, order_id)?;
    let status = validation::status(payload)?;

    Ok(CheckedUpdate {
        index,
        order,
        status,
    })
}

pub fn check_delete<S>(store: &S, order_id: &str) -> Result<usize, OrderError>
where
    S: OrderStore + ?Sized,
{
    let index = order_exists(store, order_id)?;
    let order = store
        .get(index)
        .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
    guard::ensure_deletable(order)?;

    Ok(index)
}

/// Resolve the addressed order to its current position in the store.
pub fn order_exists<S>(store: &S, order_id: &str) -> Result<usize, OrderError>
where
    S: OrderStore + ?Sized,
{
    store
        .position(order_id)
        .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
}

/// A payload id is optional, but when given it must name the routed order.
pub fn id_matches_route(payload: &OrderPayload, route_id: &str) -> Result<(), OrderError> {
    match &payload.id {
        None => Ok(()),
        Some(Value::String(id)) if id.is_empty() || id == route_id => Ok(()),
        Some(other) => Err(OrderError::IdMismatch {
            payload_id: display_id(other),
            route_id: route_id.to_string(),
        }),
    }
}

fn display_id(value: &Value) -> String {
    match value {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}
