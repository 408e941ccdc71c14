// ============================================================================
// Order Store - Process-lifetime persistence collaborators
// ============================================================================
//
// Ordered in-memory storage for orders plus identifier minting. Lives for the
// life of the process; nothing survives a restart except what the seed file
// provides at startup.
//
// ============================================================================

pub mod id_generator;
pub mod order_store;
pub mod seed;

pub use id_generator::{IdGenerator, UuidIdGenerator};
pub use order_store::{InMemoryOrderStore, OrderStore};
pub use seed::load_seed;
