use std::sync::Arc;

use crate::domain::order::{
    CustomerRef, EmployeeRef, Order, OrderLine, ProductRef, ShipperRef, ShippingAddress,
    ValidationError,
};
use crate::storage::{OrderLineRow, OrderRow, Storage};

use super::RepositoryError;

// ============================================================================
// Order Repository - Assembly, Range Enumeration, and Writes
// ============================================================================
//
// Every public operation is an independently invoked unit of work. All
// line-wise resolution is sequential, one row lookup at a time, and any
// missing foreign row anywhere in the join voids the whole operation with a
// single uniform NotFound - a half-built aggregate never escapes.
//
// Writes are sequences of independently committed single-set calls with no
// rollback. A failure mid-sequence (a product that vanished between the
// line delete and the line insert of an update) leaves a partially applied
// state; that window is documented behavior, not handled here.
//
// ============================================================================

/// First key of the dense order-id range; paging windows start here.
pub const BASE_ORDER_ID: i64 = 10248;

pub struct OrderRepository<S> {
    storage: Arc<S>,
}

impl<S: Storage> OrderRepository<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    /// Assemble the denormalized aggregate for one order key.
    ///
    /// All-or-nothing join: the header, its customer/employee/shipper, and
    /// every line's product with its category and supplier must all resolve,
    /// otherwise the whole read is `NotFound`.
    pub async fn get_order(&self, order_id: i64) -> Result<Order, RepositoryError> {
        tracing::debug!(order_id, "Assembling order");

        let header = self
            .storage
            .find_order(order_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let customer = self
            .storage
            .find_customer(&header.customer_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let employee = self
            .storage
            .find_employee(header.employee_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let shipper = self
            .storage
            .find_shipper(header.ship_via)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let line_rows = self.storage.order_lines(order_id).await?;

        let mut lines = Vec::with_capacity(line_rows.len());
        for row in &line_rows {
            let product = self.resolve_product(row.product_id).await?;
            lines.push(OrderLine {
                product,
                unit_price: row.unit_price,
                quantity: row.quantity,
                discount: row.discount,
            });
        }

        tracing::debug!(order_id, line_count = lines.len(), "Order assembled");

        Ok(Order {
            id: header.order_id,
            customer: CustomerRef {
                code: header.customer_id,
                company_name: customer.company_name,
            },
            employee: EmployeeRef {
                id: header.employee_id,
                first_name: employee.first_name,
                last_name: employee.last_name,
                country: employee.country,
            },
            shipper: ShipperRef {
                id: header.ship_via,
                company_name: shipper.company_name,
            },
            order_date: header.order_date,
            required_date: header.required_date,
            shipped_date: header.shipped_date,
            freight: header.freight,
            ship_name: header.ship_name,
            shipping_address: ShippingAddress {
                address: header.ship_address,
                city: header.ship_city,
                region: header.ship_region,
                postal_code: header.ship_postal_code,
                country: header.ship_country,
            },
            lines,
        })
    }

    /// Assemble a page of orders over the dense key range starting at
    /// `BASE_ORDER_ID + skip`.
    ///
    /// Assumes a gapless key space from the base key; a deleted order inside
    /// the window fails the whole page rather than being skipped.
    pub async fn list_orders(&self, skip: i32, count: i32) -> Result<Vec<Order>, RepositoryError> {
        if skip < 0 || count < 1 {
            return Err(ValidationError::PageOutOfRange { skip, count }.into());
        }

        tracing::debug!(skip, count, "Listing orders");

        let start = BASE_ORDER_ID + i64::from(skip);
        let mut orders = Vec::with_capacity(count as usize);

        for order_id in start..start + i64::from(count) {
            orders.push(self.get_order(order_id).await?);
        }

        Ok(orders)
    }

    // ------------------------------------------------------------------
    // Write side
    // ------------------------------------------------------------------

    /// Validate and persist a new order with its lines.
    ///
    /// Validation and all reference resolution happen before the first
    /// write, so a create that fails leaves nothing behind. The header and
    /// each line are then committed independently, lines one at a time.
    pub async fn add_order(&self, order: &Order) -> Result<i64, RepositoryError> {
        order.validate()?;

        let customer = self
            .storage
            .find_customer(&order.customer.code)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let employee = self
            .storage
            .find_employee(order.employee.id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let shipper = self
            .storage
            .find_shipper(order.shipper.id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        // Resolve every product (with category and supplier) up front.
        for line in &order.lines {
            self.resolve_product(line.product.id).await?;
        }

        let header = header_row(
            order.id,
            customer.customer_id,
            employee.employee_id,
            shipper.shipper_id,
            order,
        );
        self.storage.insert_order(header).await?;

        for line in &order.lines {
            self.storage.insert_order_line(line_row(order.id, line)).await?;
        }

        tracing::info!(
            order_id = order.id,
            line_count = order.lines.len(),
            "✅ Order created"
        );

        Ok(order.id)
    }

    /// Replace an existing order: header scalars are overwritten and the
    /// line set is rebuilt wholesale (all old lines deleted, the new set
    /// inserted - never a field-level merge).
    ///
    /// The three header references are resolved before anything is touched,
    /// but a product miss in the incoming lines surfaces only after the old
    /// lines are gone and the header is rewritten. That partially applied
    /// state is preserved, not rolled back.
    pub async fn update_order(&self, order_id: i64, order: &Order) -> Result<(), RepositoryError> {
        let _existing = self
            .storage
            .find_order(order_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let customer = self
            .storage
            .find_customer(&order.customer.code)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let employee = self
            .storage
            .find_employee(order.employee.id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let shipper = self
            .storage
            .find_shipper(order.shipper.id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        // Wholesale line rebuild starts here: each delete commits on its own.
        let old_lines = self.storage.order_lines(order_id).await?;
        for line in &old_lines {
            self.storage
                .delete_order_line(line.order_id, line.product_id)
                .await?;
        }

        let header = header_row(
            order_id,
            customer.customer_id,
            employee.employee_id,
            shipper.shipper_id,
            order,
        );
        self.storage.insert_order(header).await?;

        // Old lines are deleted and the header is rewritten; a miss below
        // leaves the order with zero lines.
        let mut new_lines = Vec::with_capacity(order.lines.len());
        for line in &order.lines {
            self.resolve_product(line.product.id).await?;
            new_lines.push(line_row(order_id, line));
        }

        for row in new_lines {
            self.storage.insert_order_line(row).await?;
        }

        tracing::info!(
            order_id,
            old_line_count = old_lines.len(),
            new_line_count = order.lines.len(),
            "✅ Order replaced"
        );

        Ok(())
    }

    /// Delete an order and its lines, one row at a time.
    pub async fn remove_order(&self, order_id: i64) -> Result<(), RepositoryError> {
        let _header = self
            .storage
            .find_order(order_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let lines = self.storage.order_lines(order_id).await?;
        for line in &lines {
            self.storage
                .delete_order_line(line.order_id, line.product_id)
                .await?;
        }

        self.storage.delete_order(order_id).await?;

        tracing::info!(order_id, line_count = lines.len(), "✅ Order deleted");

        Ok(())
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Resolve a product and its category and supplier names.
    ///
    /// A product missing either its category or its supplier is data
    /// corruption, but it still surfaces as the same uniform NotFound.
    async fn resolve_product(&self, product_id: i64) -> Result<ProductRef, RepositoryError> {
        let product = self
            .storage
            .find_product(product_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let category = self
            .storage
            .find_category(product.category_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let supplier = self
            .storage
            .find_supplier(product.supplier_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ProductRef {
            id: product.product_id,
            name: product.product_name,
            category_id: category.category_id,
            category_name: category.category_name,
            supplier_id: supplier.supplier_id,
            supplier_name: supplier.company_name,
        })
    }
}

fn header_row(
    order_id: i64,
    customer_id: String,
    employee_id: i64,
    ship_via: i64,
    order: &Order,
) -> OrderRow {
    OrderRow {
        order_id,
        customer_id,
        employee_id,
        order_date: order.order_date,
        required_date: order.required_date,
        shipped_date: order.shipped_date,
        ship_via,
        freight: order.freight,
        ship_name: order.ship_name.clone(),
        ship_address: order.shipping_address.address.clone(),
        ship_city: order.shipping_address.city.clone(),
        ship_region: order.shipping_address.region.clone(),
        ship_postal_code: order.shipping_address.postal_code.clone(),
        ship_country: order.shipping_address.country.clone(),
    }
}

fn line_row(order_id: i64, line: &OrderLine) -> OrderLineRow {
    OrderLineRow {
        order_id,
        product_id: line.product.id,
        unit_price: line.unit_price,
        quantity: line.quantity,
        discount: line.discount,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
