use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::rows::*;
use super::{Storage, StorageError};

// ============================================================================
// In-Memory Storage Backend
// ============================================================================
//
// BTreeMap-backed record sets behind a single RwLock. Each trait call takes
// the lock exactly once, so one call = one committed unit and nothing spans
// calls, matching the commit-per-statement model of the storage seam.
//
// Order lines live in a Vec so a foreign-key scan returns them in insertion
// order.
//
// Used by the in-file tests and the demo binary; production deployments plug
// a relational backend into the same trait.
//
// ============================================================================

#[derive(Default)]
struct RecordSets {
    orders: BTreeMap<i64, OrderRow>,
    order_lines: Vec<OrderLineRow>,
    customers: BTreeMap<String, CustomerRow>,
    employees: BTreeMap<i64, EmployeeRow>,
    shippers: BTreeMap<i64, ShipperRow>,
    products: BTreeMap<i64, ProductRow>,
    suppliers: BTreeMap<i64, SupplierRow>,
    categories: BTreeMap<i64, CategoryRow>,
}

#[derive(Default)]
pub struct MemoryStorage {
    sets: RwLock<RecordSets>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    // --- seeding for the read-only reference sets ---
    //
    // The repository core never writes these; tests and the demo populate
    // them up front.

    pub async fn put_customer(&self, row: CustomerRow) {
        let mut sets = self.sets.write().await;
        sets.customers.insert(row.customer_id.clone(), row);
    }

    pub async fn put_employee(&self, row: EmployeeRow) {
        let mut sets = self.sets.write().await;
        sets.employees.insert(row.employee_id, row);
    }

    pub async fn put_shipper(&self, row: ShipperRow) {
        let mut sets = self.sets.write().await;
        sets.shippers.insert(row.shipper_id, row);
    }

    pub async fn put_product(&self, row: ProductRow) {
        let mut sets = self.sets.write().await;
        sets.products.insert(row.product_id, row);
    }

    pub async fn put_supplier(&self, row: SupplierRow) {
        let mut sets = self.sets.write().await;
        sets.suppliers.insert(row.supplier_id, row);
    }

    pub async fn put_category(&self, row: CategoryRow) {
        let mut sets = self.sets.write().await;
        sets.categories.insert(row.category_id, row);
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn find_order(&self, order_id: i64) -> Result<Option<OrderRow>, StorageError> {
        let sets = self.sets.read().await;
        Ok(sets.orders.get(&order_id).cloned())
    }

    async fn find_customer(&self, customer_id: &str) -> Result<Option<CustomerRow>, StorageError> {
        let sets = self.sets.read().await;
        Ok(sets.customers.get(customer_id).cloned())
    }

    async fn find_employee(&self, employee_id: i64) -> Result<Option<EmployeeRow>, StorageError> {
        let sets = self.sets.read().await;
        Ok(sets.employees.get(&employee_id).cloned())
    }

    async fn find_shipper(&self, shipper_id: i64) -> Result<Option<ShipperRow>, StorageError> {
        let sets = self.sets.read().await;
        Ok(sets.shippers.get(&shipper_id).cloned())
    }

    async fn find_product(&self, product_id: i64) -> Result<Option<ProductRow>, StorageError> {
        let sets = self.sets.read().await;
        Ok(sets.products.get(&product_id).cloned())
    }

    async fn find_supplier(&self, supplier_id: i64) -> Result<Option<SupplierRow>, StorageError> {
        let sets = self.sets.read().await;
        Ok(sets.suppliers.get(&supplier_id).cloned())
    }

    async fn find_category(&self, category_id: i64) -> Result<Option<CategoryRow>, StorageError> {
        let sets = self.sets.read().await;
        Ok(sets.categories.get(&category_id).cloned())
    }

    async fn order_lines(&self, order_id: i64) -> Result<Vec<OrderLineRow>, StorageError> {
        let sets = self.sets.read().await;
        Ok(sets
            .order_lines
            .iter()
            .filter(|line| line.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn insert_order(&self, row: OrderRow) -> Result<OrderRow, StorageError> {
        let mut sets = self.sets.write().await;
        sets.orders.insert(row.order_id, row.clone());
        Ok(row)
    }

    async fn insert_order_line(&self, row: OrderLineRow) -> Result<OrderLineRow, StorageError> {
        let mut sets = self.sets.write().await;
        // Upsert on the (order_id, product_id) key, insertion order otherwise
        if let Some(existing) = sets
            .order_lines
            .iter_mut()
            .find(|line| line.order_id == row.order_id && line.product_id == row.product_id)
        {
            *existing = row.clone();
        } else {
            sets.order_lines.push(row.clone());
        }
        Ok(row)
    }

    async fn delete_order(&self, order_id: i64) -> Result<(), StorageError> {
        let mut sets = self.sets.write().await;
        sets.orders.remove(&order_id);
        Ok(())
    }

    async fn delete_order_line(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<(), StorageError> {
        let mut sets = self.sets.write().await;
        sets.order_lines
            .retain(|line| !(line.order_id == order_id && line.product_id == product_id));
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
