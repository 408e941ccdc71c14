// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Domain rules live here, independent of HTTP and of how records are stored.
// Each resource has its own subdirectory with:
// - Value objects
// - Commands
// - Errors
// - Validation and guards
// - Command handler
//
// ============================================================================

pub mod order;
