// ============================================================================
// Domain Layer - Business Model
// ============================================================================
//
// Aggregate shapes and their validation rules, completely separate from the
// storage layer. Each aggregate has its own subdirectory.
//
// ============================================================================

pub mod order;
