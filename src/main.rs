use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use northwind_orders::storage::{
    CategoryRow, CustomerRow, EmployeeRow, MemoryStorage, OrderLineRow, OrderRow, ProductRow,
    ShipperRow, Storage, SupplierRow,
};
use northwind_orders::{
    CustomerRef, EmployeeRef, Order, OrderLine, OrderRepository, ProductRef, ShipperRef,
    ShippingAddress,
};

// ============================================================================
// Demo: full order lifecycle against a seeded in-memory store
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,northwind_orders=debug")),
        )
        .init();

    tracing::info!("🚀 Starting Northwind order repository demo");

    let storage = Arc::new(MemoryStorage::new());
    seed(&storage).await?;
    let repository = OrderRepository::new(storage);

    // === 1. Assemble a seeded order ===
    let order = repository.get_order(10248).await?;
    tracing::info!(
        order_id = order.id,
        customer = %order.customer.company_name,
        shipper = %order.shipper.company_name,
        line_count = order.lines.len(),
        "✅ Assembled order"
    );
    tracing::info!("Aggregate: {}", serde_json::to_string_pretty(&order)?);

    // === 2. Page over the dense key range ===
    let page = repository.list_orders(0, 2).await?;
    tracing::info!(page_len = page.len(), "✅ Listed orders 10248..10249");

    // === 3. Create a new order ===
    let submitted = Order {
        id: 11000,
        customer: CustomerRef::new("ALFKI"),
        employee: EmployeeRef::new(1),
        shipper: ShipperRef::new(1),
        order_date: Utc.with_ymd_and_hms(1998, 4, 6, 0, 0, 0).unwrap(),
        required_date: Utc.with_ymd_and_hms(1998, 5, 4, 0, 0, 0).unwrap(),
        shipped_date: None,
        freight: 8.5,
        ship_name: "Alfreds Futterkiste".to_string(),
        shipping_address: ShippingAddress {
            address: "Obere Str. 57".to_string(),
            city: "Berlin".to_string(),
            region: None,
            postal_code: "12209".to_string(),
            country: "Germany".to_string(),
        },
        lines: vec![OrderLine {
            product: ProductRef::new(11),
            unit_price: 21.0,
            quantity: 5,
            discount: 0.0,
        }],
    };
    let key = repository.add_order(&submitted).await?;
    tracing::info!(order_id = key, "✅ Order created");

    // === 4. Replace its line set ===
    let mut replacement = submitted.clone();
    replacement.lines = vec![OrderLine {
        product: ProductRef::new(42),
        unit_price: 14.0,
        quantity: 2,
        discount: 0.05,
    }];
    repository.update_order(key, &replacement).await?;
    let updated = repository.get_order(key).await?;
    tracing::info!(
        order_id = key,
        product = %updated.lines[0].product.name,
        "✅ Order updated"
    );

    // === 5. Delete it again ===
    repository.remove_order(key).await?;
    tracing::info!(order_id = key, "✅ Order deleted");

    tracing::info!("🎉 Demo complete!");

    Ok(())
}

/// Seed a slice of Northwind: reference data plus two orders starting at the
/// base key.
async fn seed(storage: &Arc<MemoryStorage>) -> anyhow::Result<()> {
    storage
        .put_customer(CustomerRow {
            customer_id: "ALFKI".to_string(),
            company_name: "Alfreds Futterkiste".to_string(),
            contact_name: Some("Maria Anders".to_string()),
            country: Some("Germany".to_string()),
            phone: Some("030-0074321".to_string()),
        })
        .await;
    storage
        .put_customer(CustomerRow {
            customer_id: "VINET".to_string(),
            company_name: "Vins et alcools Chevalier".to_string(),
            contact_name: Some("Paul Henriot".to_string()),
            country: Some("France".to_string()),
            phone: None,
        })
        .await;

    storage
        .put_employee(EmployeeRow {
            employee_id: 1,
            first_name: "Nancy".to_string(),
            last_name: "Davolio".to_string(),
            title: Some("Sales Representative".to_string()),
            country: "USA".to_string(),
        })
        .await;

    storage
        .put_shipper(ShipperRow {
            shipper_id: 1,
            company_name: "Speedy Express".to_string(),
            phone: "(503) 555-9831".to_string(),
        })
        .await;
    storage
        .put_shipper(ShipperRow {
            shipper_id: 3,
            company_name: "Federal Shipping".to_string(),
            phone: "(503) 555-9931".to_string(),
        })
        .await;

    storage
        .put_category(CategoryRow {
            category_id: 4,
            category_name: "Dairy Products".to_string(),
            description: Some("Cheeses".to_string()),
        })
        .await;
    storage
        .put_category(CategoryRow {
            category_id: 8,
            category_name: "Seafood".to_string(),
            description: None,
        })
        .await;

    storage
        .put_supplier(SupplierRow {
            supplier_id: 5,
            company_name: "Cooperativa de Quesos 'Las Cabras'".to_string(),
            country: Some("Spain".to_string()),
        })
        .await;
    storage
        .put_supplier(SupplierRow {
            supplier_id: 20,
            company_name: "Leka Trading".to_string(),
            country: Some("Singapore".to_string()),
        })
        .await;

    storage
        .put_product(ProductRow {
            product_id: 11,
            product_name: "Queso Cabrales".to_string(),
            supplier_id: 5,
            category_id: 4,
            unit_price: Some(21.0),
            discontinued: Some(0),
        })
        .await;
    storage
        .put_product(ProductRow {
            product_id: 42,
            product_name: "Singaporean Hokkien Fried Mee".to_string(),
            supplier_id: 20,
            category_id: 8,
            unit_price: Some(14.0),
            discontinued: Some(1),
        })
        .await;

    let base_date = Utc.with_ymd_and_hms(1996, 7, 4, 0, 0, 0).unwrap();
    storage
        .insert_order(OrderRow {
            order_id: 10248,
            customer_id: "VINET".to_string(),
            employee_id: 1,
            order_date: base_date,
            required_date: Utc.with_ymd_and_hms(1996, 8, 1, 0, 0, 0).unwrap(),
            shipped_date: Some(Utc.with_ymd_and_hms(1996, 7, 16, 0, 0, 0).unwrap()),
            ship_via: 3,
            freight: 32.38,
            ship_name: "Vins et alcools Chevalier".to_string(),
            ship_address: "59 rue de l'Abbaye".to_string(),
            ship_city: "Reims".to_string(),
            ship_region: None,
            ship_postal_code: "51100".to_string(),
            ship_country: "France".to_string(),
        })
        .await?;
    storage
        .insert_order_line(OrderLineRow {
            order_id: 10248,
            product_id: 11,
            unit_price: 14.0,
            quantity: 12,
            discount: 0.0,
        })
        .await?;
    storage
        .insert_order_line(OrderLineRow {
            order_id: 10248,
            product_id: 42,
            unit_price: 9.8,
            quantity: 10,
            discount: 0.0,
        })
        .await?;

    storage
        .insert_order(OrderRow {
            order_id: 10249,
            customer_id: "ALFKI".to_string(),
            employee_id: 1,
            order_date: Utc.with_ymd_and_hms(1996, 7, 5, 0, 0, 0).unwrap(),
            required_date: Utc.with_ymd_and_hms(1996, 8, 16, 0, 0, 0).unwrap(),
            shipped_date: Some(Utc.with_ymd_and_hms(1996, 7, 10, 0, 0, 0).unwrap()),
            ship_via: 1,
            freight: 11.61,
            ship_name: "Alfreds Futterkiste".to_string(),
            ship_address: "Obere Str. 57".to_string(),
            ship_city: "Berlin".to_string(),
            ship_region: None,
            ship_postal_code: "12209".to_string(),
            ship_country: "Germany".to_string(),
        })
        .await?;
    storage
        .insert_order_line(OrderLineRow {
            order_id: 10249,
            product_id: 42,
            unit_price: 14.0,
            quantity: 9,
            discount: 0.0,
        })
        .await?;

    tracing::info!("Seeded in-memory store with Northwind sample rows");
    Ok(())
}
