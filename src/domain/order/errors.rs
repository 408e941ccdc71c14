use super::value_objects::OrderStatus;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

/// Classification of a rejected call, independent of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    InvalidStateTransition,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::InvalidStateTransition => "invalid_state_transition",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Order does not exist: {0}.")]
    NotFound(String),

    #[error("Order must include a deliverTo")]
    MissingDeliverTo,

    #[error("Order must include a mobileNumber")]
    MissingMobileNumber,

    #[error("Order must include a dish")]
    MissingDishes,

    #[error("Order must include at least one dish")]
    EmptyDishes,

    #[error("Dish {0} must have a quantity that is an integer greater than 0")]
    InvalidDishQuantity(usize),

    #[error("Order id does not match route id. Order: {payload_id}, Route: {route_id}")]
    IdMismatch { payload_id: String, route_id: String },

    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,

    #[error("An order cannot be deleted unless it is pending. Current status: {0}")]
    NotPending(OrderStatus),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::NotPending(_) => ErrorKind::InvalidStateTransition,
            OrderError::MissingDeliverTo
            | OrderError::MissingMobileNumber
            | OrderError::MissingDishes
            | OrderError::EmptyDishes
            | OrderError::InvalidDishQuantity(_)
            | OrderError::IdMismatch { .. }
            | OrderError::InvalidStatus => ErrorKind::BadRequest,
        }
    }
}
