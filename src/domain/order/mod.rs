// ============================================================================
// Order Domain - Aggregate Model and Validation
// ============================================================================
//
// This module contains all Order-specific domain code:
// - The denormalized Order aggregate and its line set
// - Reference projections (customer, employee, shipper, product)
// - The embedded ShippingAddress value type
// - Pre-write validation (ValidationError enum)
//
// Persistence lives in src/storage/, orchestration in src/repository/.
//
// ============================================================================

pub mod errors;
pub mod model;

// Re-export for convenience
pub use errors::*;
pub use model::*;
