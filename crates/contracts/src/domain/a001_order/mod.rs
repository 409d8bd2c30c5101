use crate::domain::common::parse_day;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment status of an order.
///
/// The wire representation uses the display strings of the platform API
/// ("Rider Assigned" contains a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Delivered,
    Cancelled,
    #[serde(rename = "Rider Assigned")]
    RiderAssigned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Rejected,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::RiderAssigned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::RiderAssigned => "Rider Assigned",
        }
    }

    pub fn from_str_loose(value: &str) -> Option<OrderStatus> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Terminal statuses never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Rejected | OrderStatus::Delivered | OrderStatus::Cancelled
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw customer reference as the API actually sends it.
///
/// Orders carry the buyer either as a populated object (under `userId` or
/// `user`, depending on the endpoint) or as a bare user id string. All three
/// shapes are legal inputs; they normalize into [`Customer`] on deserialize.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CustomerRef {
    Details(CustomerDetails),
    Id(String),
    Missing,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct CustomerDetails {
    #[serde(default, alias = "_id")]
    id: Option<String>,
    #[serde(default, alias = "fullName", alias = "userName")]
    name: Option<String>,
    #[serde(default, alias = "phone", alias = "mobileNumber")]
    mobile: Option<String>,
}

/// Normalized customer reference on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CustomerRef")]
pub struct Customer {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: String,
}

impl Customer {
    /// True when only a user id arrived and the name/mobile still need a
    /// `getsingleuser` lookup.
    pub fn needs_lookup(&self) -> bool {
        self.name.is_empty() && self.id.is_some()
    }
}

impl From<CustomerRef> for Customer {
    fn from(value: CustomerRef) -> Self {
        match value {
            CustomerRef::Details(d) => Customer {
                id: d.id,
                name: d.name.unwrap_or_default(),
                mobile: d.mobile.unwrap_or_default(),
            },
            CustomerRef::Id(id) => Customer {
                id: Some(id),
                ..Customer::default()
            },
            CustomerRef::Missing => Customer::default(),
        }
    }
}

/// Delivery rider assigned to an order, if any.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RiderRef {
    Details(CustomerDetails),
    Id(String),
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RiderRef")]
pub struct Rider {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl Rider {
    pub fn is_assigned(&self) -> bool {
        self.id.is_some() || !self.name.is_empty()
    }
}

impl From<RiderRef> for Rider {
    fn from(value: RiderRef) -> Self {
        match value {
            RiderRef::Details(d) => Rider {
                id: d.id,
                name: d.name.unwrap_or_default(),
            },
            RiderRef::Id(id) => Rider {
                id: Some(id),
                name: String::new(),
            },
            RiderRef::Missing => Rider::default(),
        }
    }
}

/// One medicine line on an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default, alias = "medicineName", alias = "itemName")]
    pub name: String,
    #[serde(default, alias = "qty")]
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// One entry of the optional status history trail.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusEvent {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "createdAt")]
    pub timestamp: String,
}

/// A marketplace order as fetched from the vendor/admin endpoints.
///
/// Every field except `status` is immutable display data once fetched;
/// `status` is mutated by the order-status workflow only.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, rename = "userId", alias = "user")]
    pub customer: Customer,
    #[serde(default, alias = "medicines", alias = "orderItems")]
    pub items: Vec<OrderLine>,
    #[serde(default, alias = "subTotal")]
    pub subtotal: f64,
    #[serde(default)]
    pub delivery_charge: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default, alias = "totalAmount")]
    pub grand_total: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, rename = "riderId", alias = "rider")]
    pub rider: Rider,
    #[serde(default, alias = "address")]
    pub delivery_address: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub status_history: Vec<StatusEvent>,
}

impl Order {
    pub fn created_day(&self) -> Option<NaiveDate> {
        parse_day(&self.created_at)
    }

    pub fn updated_day(&self) -> Option<NaiveDate> {
        parse_day(&self.updated_at)
    }
}

/// `GET /api/vendor/{pending,delivered}orders/{vendorId}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// `GET /api/admin/singleorder/{orderId}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleOrderResponse {
    pub order: Order,
}

/// A platform user as returned by `GET /api/admin/getsingleuser/{userId}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlatformUser {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default, alias = "phone")]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
}

/// `GET /api/admin/getsingleuser/{userId}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleUserResponse {
    pub user: PlatformUser,
}

/// `PUT /api/vendor/orderstatus/{vendorId}/{orderId}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_with_populated_user_id_object() {
        let json = r#"{
            "_id": "ord-1",
            "userId": {"_id": "u-1", "name": "Asha Verma", "mobile": "9876543210"},
            "items": [{"name": "Paracetamol 500mg", "quantity": 2, "price": 30.0}],
            "subtotal": 60.0,
            "deliveryCharge": 20.0,
            "discount": 0.0,
            "grandTotal": 80.0,
            "status": "Pending",
            "createdAt": "2025-09-01T10:15:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "ord-1");
        assert_eq!(order.customer.name, "Asha Verma");
        assert_eq!(order.customer.mobile, "9876543210");
        assert!(!order.customer.needs_lookup());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items[0].line_total(), 60.0);
        assert_eq!(
            order.created_day(),
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
    }

    #[test]
    fn order_with_user_key_and_bare_id() {
        // Some endpoints populate `user` instead of `userId`, and some only
        // send the raw user id string. Both must normalize.
        let populated: Order = serde_json::from_str(
            r#"{"_id": "ord-2", "user": {"name": "Ravi", "phone": "9000000001"}, "status": "Delivered"}"#,
        )
        .unwrap();
        assert_eq!(populated.customer.name, "Ravi");
        assert_eq!(populated.customer.mobile, "9000000001");

        let bare: Order =
            serde_json::from_str(r#"{"_id": "ord-3", "userId": "u-42"}"#).unwrap();
        assert_eq!(bare.customer.id.as_deref(), Some("u-42"));
        assert!(bare.customer.needs_lookup());
    }

    #[test]
    fn order_without_customer_defaults_to_empty() {
        let order: Order = serde_json::from_str(r#"{"_id": "ord-4"}"#).unwrap();
        assert_eq!(order.customer, Customer::default());
        assert!(!order.customer.needs_lookup());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn rider_assigned_status_round_trips_with_space() {
        let order: Order = serde_json::from_str(
            r#"{"_id": "ord-5", "status": "Rider Assigned", "riderId": {"name": "Kiran"}}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::RiderAssigned);
        assert!(order.rider.is_assigned());
        assert_eq!(order.rider.name, "Kiran");

        let body = serde_json::to_string(&UpdateStatusRequest {
            status: OrderStatus::RiderAssigned,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"Rider Assigned"}"#);
    }

    #[test]
    fn status_loose_parsing_and_terminality() {
        assert_eq!(
            OrderStatus::from_str_loose("delivered"),
            Some(OrderStatus::Delivered)
        );
        assert_eq!(OrderStatus::from_str_loose("shipped"), None);
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Accepted.is_terminal());
    }
}
