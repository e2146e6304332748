// ============================================================================
// Storage Accessor - Persistence Seam
// ============================================================================
//
// The seam between the repository core and the storage engine: typed
// find-by-key, foreign-key scan, insert, and delete over the eight record
// sets. Every call is an independently committed unit of work; the trait
// offers no transaction spanning calls.
//
// The core only ever writes orders and order lines. Customers, employees,
// shippers, products, suppliers, and categories are read-only lookups.
//
// ============================================================================

pub mod memory;
pub mod rows;

pub use memory::MemoryStorage;
pub use rows::*;

use async_trait::async_trait;

/// Failure from the storage backend, surfaced to the core as an internal
/// error with no retry.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend failure: {0}")]
    Backend(#[from] anyhow::Error),
}

#[async_trait]
pub trait Storage: Send + Sync {
    // --- find by key ---

    async fn find_order(&self, order_id: i64) -> Result<Option<OrderRow>, StorageError>;

    async fn find_customer(&self, customer_id: &str) -> Result<Option<CustomerRow>, StorageError>;

    async fn find_employee(&self, employee_id: i64) -> Result<Option<EmployeeRow>, StorageError>;

    async fn find_shipper(&self, shipper_id: i64) -> Result<Option<ShipperRow>, StorageError>;

    async fn find_product(&self, product_id: i64) -> Result<Option<ProductRow>, StorageError>;

    async fn find_supplier(&self, supplier_id: i64) -> Result<Option<SupplierRow>, StorageError>;

    async fn find_category(&self, category_id: i64) -> Result<Option<CategoryRow>, StorageError>;

    // --- scan by foreign key ---

    /// All line rows for one order, in the order the store returns them.
    async fn order_lines(&self, order_id: i64) -> Result<Vec<OrderLineRow>, StorageError>;

    // --- insert (upsert) ---

    /// Insert or replace the order header; commits immediately.
    async fn insert_order(&self, row: OrderRow) -> Result<OrderRow, StorageError>;

    /// Insert or replace one line row; commits immediately.
    async fn insert_order_line(&self, row: OrderLineRow) -> Result<OrderLineRow, StorageError>;

    // --- delete ---

    async fn delete_order(&self, order_id: i64) -> Result<(), StorageError>;

    async fn delete_order_line(&self, order_id: i64, product_id: i64)
        -> Result<(), StorageError>;
}
