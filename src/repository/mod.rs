// ============================================================================
// Repository Layer - Order CRUD Core
// ============================================================================
//
// Assembles, persists, and mutates the denormalized Order aggregate across
// the relational record sets. The boundary adapter above maps the error
// kinds below to transport outcomes; the storage accessor underneath commits
// every call independently.
//
// ============================================================================

pub mod order_repository;

pub use order_repository::{OrderRepository, BASE_ORDER_ID};

use crate::domain::order::ValidationError;
use crate::storage::StorageError;

/// Outcome taxonomy for every repository operation.
///
/// `NotFound` is deliberately uniform: callers cannot tell a missing order
/// from a missing shipper or product; any absent reference voids the whole
/// operation. Partial writes are never rolled back.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Invalid order input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Order or one of its references was not found")]
    NotFound,

    #[error("Internal storage failure: {0}")]
    Internal(#[from] StorageError),
}
