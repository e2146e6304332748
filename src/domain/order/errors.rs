// ============================================================================
// Order Validation Errors
// ============================================================================
//
// Structural input violations, all detected before any storage access.
// Safe to retry after correcting the input.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Order id must not be zero")]
    ZeroOrderId,

    #[error("Order line product id must not be zero")]
    ZeroProductId,

    #[error("Order line unit price must not be negative: {0}")]
    NegativeUnitPrice(f64),

    #[error("Order line discount must not be negative: {0}")]
    NegativeDiscount(f64),

    #[error("Order line quantity must be at least 1: {0}")]
    InvalidQuantity(i64),

    #[error("Page window out of range: skip={skip}, count={count}")]
    PageOutOfRange { skip: i32, count: i32 },
}
