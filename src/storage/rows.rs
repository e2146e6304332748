use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Relational Rows
// ============================================================================
//
// Row types for the eight record sets the repository touches. Orders and
// order lines are the only sets the core writes; the rest are read-only
// reference data resolved by key during assembly and validation.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRow {
    pub order_id: i64,
    pub customer_id: String,
    pub employee_id: i64,
    pub order_date: DateTime<Utc>,
    pub required_date: DateTime<Utc>,
    pub shipped_date: Option<DateTime<Utc>>,
    pub ship_via: i64,
    pub freight: f64,
    pub ship_name: String,
    pub ship_address: String,
    pub ship_city: String,
    pub ship_region: Option<String>,
    pub ship_postal_code: String,
    pub ship_country: String,
}

/// Keyed by (order_id, product_id); a line never outlives its order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRow {
    pub order_id: i64,
    pub product_id: i64,
    pub unit_price: f64,
    pub quantity: i64,
    pub discount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRow {
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRow {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipperRow {
    pub shipper_id: i64,
    pub company_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    pub product_id: i64,
    pub product_name: String,
    pub supplier_id: i64,
    pub category_id: i64,
    pub unit_price: Option<f64>,
    pub discontinued: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRow {
    pub supplier_id: i64,
    pub company_name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category_id: i64,
    pub category_name: String,
    pub description: Option<String>,
}
