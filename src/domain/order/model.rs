use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

// ============================================================================
// Order Aggregate - Denormalized Order Model
// ============================================================================
//
// The fully assembled order: header scalars, shipping address, the three
// resolved header references (customer, employee, shipper), and the ordered
// line set with product/category/supplier names resolved.
//
// Assembled transiently on every read; never cached.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer: CustomerRef,
    pub employee: EmployeeRef,
    pub shipper: ShipperRef,
    pub order_date: DateTime<Utc>,
    pub required_date: DateTime<Utc>,
    pub shipped_date: Option<DateTime<Utc>>,
    pub freight: f64,
    pub ship_name: String,
    pub shipping_address: ShippingAddress,
    /// Insertion order is line order.
    pub lines: Vec<OrderLine>,
}

/// One product/quantity/price/discount entry; owned exclusively by its order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: ProductRef,
    pub unit_price: f64,
    pub quantity: i64,
    pub discount: f64,
}

// ============================================================================
// Reference Projections
// ============================================================================
//
// Display-relevant projections of foreign aggregates. The repository never
// owns these records; on the write path only the keys are read, and the
// `new` constructors build key-only values for callers submitting an order.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRef {
    pub code: String,
    pub company_name: String,
}

impl CustomerRef {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            company_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
}

impl EmployeeRef {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            country: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipperRef {
    pub id: i64,
    pub company_name: String,
}

impl ShipperRef {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            company_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category_name: String,
    pub supplier_id: i64,
    pub supplier_name: String,
}

impl ProductRef {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
            category_id: 0,
            category_name: String::new(),
            supplier_id: 0,
            supplier_name: String::new(),
        }
    }
}

/// Value type embedded in the order header; no independent identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub region: Option<String>,
    pub postal_code: String,
    pub country: String,
}

// ============================================================================
// Pre-Write Validation
// ============================================================================

impl Order {
    /// Structural validation, enforced before any storage access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id == 0 {
            return Err(ValidationError::ZeroOrderId);
        }

        for line in &self.lines {
            if line.product.id == 0 {
                return Err(ValidationError::ZeroProductId);
            }
            if line.unit_price < 0.0 {
                return Err(ValidationError::NegativeUnitPrice(line.unit_price));
            }
            if line.discount < 0.0 {
                return Err(ValidationError::NegativeDiscount(line.discount));
            }
            if line.quantity < 1 {
                return Err(ValidationError::InvalidQuantity(line.quantity));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_order() -> Order {
        Order {
            id: 11000,
            customer: CustomerRef::new("ALFKI"),
            employee: EmployeeRef::new(1),
            shipper: ShipperRef::new(1),
            order_date: Utc.with_ymd_and_hms(1998, 4, 6, 0, 0, 0).unwrap(),
            required_date: Utc.with_ymd_and_hms(1998, 5, 4, 0, 0, 0).unwrap(),
            shipped_date: None,
            freight: 32.38,
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
                unit_price: 9.99,
                quantity: 5,
                discount: 0.0,
            }],
        }
    }

    #[test]
    fn test_valid_order_passes_validation() {
        assert!(sample_order().validate().is_ok());
    }

    #[test]
    fn test_zero_order_id_rejected() {
        let mut order = sample_order();
        order.id = 0;
        assert!(matches!(order.validate(), Err(ValidationError::ZeroOrderId)));
    }

    #[test]
    fn test_zero_product_id_rejected() {
        let mut order = sample_order();
        order.lines[0].product = ProductRef::new(0);
        assert!(matches!(
            order.validate(),
            Err(ValidationError::ZeroProductId)
        ));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut order = sample_order();
        order.lines[0].quantity = 0;
        assert!(matches!(
            order.validate(),
            Err(ValidationError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn test_negative_unit_price_rejected() {
        let mut order = sample_order();
        order.lines[0].unit_price = -0.01;
        assert!(matches!(
            order.validate(),
            Err(ValidationError::NegativeUnitPrice(_))
        ));
    }

    #[test]
    fn test_negative_discount_rejected() {
        let mut order = sample_order();
        order.lines[0].discount = -0.5;
        assert!(matches!(
            order.validate(),
            Err(ValidationError::NegativeDiscount(_))
        ));
    }

    #[test]
    fn test_order_serialization_round_trip() {
        let order = sample_order();
        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(order.id, deserialized.id);
        assert_eq!(order.customer.code, deserialized.customer.code);
        assert_eq!(order.lines.len(), deserialized.lines.len());
        assert_eq!(order.lines[0].quantity, deserialized.lines[0].quantity);
    }

    #[test]
    fn test_key_only_refs() {
        let product = ProductRef::new(42);
        assert_eq!(product.id, 42);
        assert!(product.name.is_empty());

        let customer = CustomerRef::new("ALFKI");
        assert_eq!(customer.code, "ALFKI");
        assert!(customer.company_name.is_empty());
    }
}
