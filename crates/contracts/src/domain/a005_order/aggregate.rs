use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::shared::wire::string_or_number;
use crate::shared::{Decimal, EntityId, RefField, Record, Resource};

/// Placeholder shown for values the backend did not provide.
pub const MISSING: &str = "—";

// ============================================================================
// Wire shape
// ============================================================================

#[derive(Deserialize)]
struct OrderUserWire {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

#[derive(Deserialize)]
struct ProductSnapshotWire {
    id: EntityId,
    name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    code: Option<String>,
    price: Decimal,
    #[serde(default)]
    unity: Option<RefField>,
}

#[derive(Deserialize)]
struct OrderItemWire {
    product: ProductSnapshotWire,
    quantity: Decimal,
    price: Decimal,
}

#[derive(Deserialize)]
struct OrderWire {
    id: EntityId,
    #[serde(default, deserialize_with = "string_or_number")]
    order_number: Option<String>,
    #[serde(default)]
    user: Option<OrderUserWire>,
    #[serde(default)]
    name: Option<String>,
    total_price: Decimal,
    created_at: DateTime<Utc>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    contact_number: Option<String>,
    #[serde(default)]
    items: Vec<OrderItemWire>,
}

// ============================================================================
// View shape
// ============================================================================

/// One order line with the product snapshot flattened in.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: EntityId,
    pub product_name: String,
    pub product_code: Option<String>,
    pub quantity: Decimal,
    /// Line total.
    pub price: Decimal,
    pub unit_price: Decimal,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "OrderWire")]
pub struct Order {
    pub id: EntityId,
    pub order_number: String,
    pub customer_name: String,
    /// Username of the ordering account; the orders filter matches on it.
    pub customer_email: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub comment: Option<String>,
    pub contact_number: String,
    pub items: Vec<OrderItem>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<OrderWire> for Order {
    fn from(wire: OrderWire) -> Self {
        let (full_name, username) = match wire.user {
            Some(user) => {
                let full_name = match (present(user.first_name), present(user.last_name)) {
                    (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
                    _ => None,
                };
                (full_name, present(user.username))
            }
            None => (None, None),
        };

        let items = wire
            .items
            .into_iter()
            .map(|item| OrderItem {
                product_id: item.product.id,
                product_name: item.product.name,
                product_code: item.product.code,
                quantity: item.quantity,
                price: item.price,
                unit_price: item.product.price,
                unit: item
                    .product
                    .unity
                    .map(|u| u.label())
                    .filter(|u| !u.trim().is_empty())
                    .unwrap_or_else(|| MISSING.to_string()),
            })
            .collect();

        Self {
            id: wire.id,
            order_number: wire.order_number.unwrap_or_else(|| wire.id.to_string()),
            customer_name: full_name
                .or_else(|| present(wire.name))
                .unwrap_or_else(|| MISSING.to_string()),
            customer_email: username.unwrap_or_else(|| MISSING.to_string()),
            amount: wire.total_price,
            created_at: wire.created_at,
            comment: present(wire.comment),
            contact_number: present(wire.contact_number).unwrap_or_else(|| MISSING.to_string()),
            items,
        }
    }
}

impl Record for Order {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Orders are read-only here apart from delete.
pub struct OrderResource;

impl Resource for OrderResource {
    const PATH: &'static str = "order";
    type Record = Order;
    type Draft = ();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::{json, Value};

    pub(crate) fn order_json(id: i64, username: &str, created_at: &str) -> Value {
        json!({
            "id": id,
            "order_number": 1000 + id,
            "user": {"username": username, "first_name": "Ali", "last_name": "Valiyev"},
            "total_price": "45000.00",
            "created_at": created_at,
            "comment": "",
            "contact_number": "+998901234567",
            "items": [
                {
                    "product": {"id": 1, "name": "Apples", "code": "A-1", "price": "15000.00", "unity": "kg"},
                    "quantity": 2,
                    "price": "30000.00"
                },
                {
                    "product": {"id": 2, "name": "Milk", "code": 77, "price": "7500.00", "unity": {"id": 3, "name": "litr"}},
                    "quantity": "2",
                    "price": "15000.00"
                }
            ]
        })
    }

    #[test]
    fn test_flattens_wire_order() {
        let order: Order =
            serde_json::from_value(order_json(1, "ali", "2025-03-15T14:02:26+05:00")).unwrap();

        assert_eq!(order.order_number, "1001");
        assert_eq!(order.customer_name, "Ali Valiyev");
        assert_eq!(order.customer_email, "ali");
        assert_eq!(order.amount.as_str(), "45000.00");
        assert_eq!(order.comment, None);
        assert_eq!(order.items.len(), 2);

        let milk = &order.items[1];
        assert_eq!(milk.product_code.as_deref(), Some("77"));
        assert_eq!(milk.unit, "litr");
        assert_eq!(milk.unit_price.as_str(), "7500.00");
        assert_eq!(milk.price.as_str(), "15000.00");
    }

    #[test]
    fn test_guest_order_falls_back_to_name() {
        let order: Order = serde_json::from_value(json!({
            "id": 5,
            "user": null,
            "name": "Walk-in",
            "total_price": 0,
            "created_at": "2025-03-15T09:00:00Z",
            "items": [{"product": {"id": 1, "name": "Apples", "price": 1}, "quantity": 1, "price": 1}]
        }))
        .unwrap();

        assert_eq!(order.customer_name, "Walk-in");
        assert_eq!(order.customer_email, MISSING);
        assert_eq!(order.contact_number, MISSING);
        assert_eq!(order.order_number, "5");
        assert_eq!(order.items[0].unit, MISSING);
    }

    #[test]
    fn test_partial_user_name_is_not_used() {
        let order: Order = serde_json::from_value(json!({
            "id": 6,
            "user": {"username": "bek", "first_name": "Bek", "last_name": ""},
            "total_price": "1",
            "created_at": "2025-03-15T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(order.customer_name, MISSING);
        assert_eq!(order.customer_email, "bek");
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_missing_timestamp_fails_loudly() {
        let result = serde_json::from_value::<Order>(json!({
            "id": 7,
            "total_price": "1",
            "items": []
        }));
        assert!(result.is_err());
    }
}
