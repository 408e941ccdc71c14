use super::errors::OrderError;
use super::value_objects::Order;

// ============================================================================
// State Guard
// ============================================================================
//
// The single lifecycle rule: an order can only be deleted while it is still
// in its initial status. Status updates themselves are unconstrained.
//
// ============================================================================

pub fn ensure_deletable(order: &Order) -> Result<(), OrderError> {
    if order.status.is_initial() {
        Ok(())
    } else {
        Err(OrderError::NotPending(order.status))
    }
}
