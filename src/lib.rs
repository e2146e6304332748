// ============================================================================
// Northwind Orders - Denormalizing Order Repository
// ============================================================================
//
// CRUD over the Northwind order schema: each read joins the order header,
// its customer/employee/shipper, and every line's product, category, and
// supplier into one denormalized aggregate; writes persist that aggregate
// back across the same record sets, one committed call at a time.
//
// Layers:
// - domain/      aggregate model and validation
// - storage/     Storage trait (the persistence seam) + in-memory backend
// - repository/  OrderRepository: assembly, paging, create/update/delete
//
// The HTTP boundary and the production storage engine plug in from outside.
//
// ============================================================================

pub mod domain;
pub mod repository;
pub mod storage;

pub use domain::order::{
    CustomerRef, EmployeeRef, Order, OrderLine, ProductRef, ShipperRef, ShippingAddress,
    ValidationError,
};
pub use repository::{OrderRepository, RepositoryError, BASE_ORDER_ID};
pub use storage::{MemoryStorage, Storage, StorageError};
