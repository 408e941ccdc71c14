// ============================================================================
// Order Domain - Validation and lifecycle rules for orders
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (Order, Dish, OrderStatus)
// - Commands (OrderPayload input schema, OrderCommand)
// - Errors (OrderError enum and its ErrorKind classification)
// - Validation (field checks over a payload)
// - Guard (the pending-only delete rule)
// - Pipeline (ordered, short-circuiting check chains per operation)
// - Command Handler (resource operations run after their chain passes)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod validation;
pub mod guard;
pub mod pipeline;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use command_handler::*;
