use crate::domain::a001_order::Customer;
use serde::{Deserialize, Serialize};

/// A consultation/pickup booking made against the vendor's pharmacy.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, rename = "userId", alias = "user")]
    pub customer: Customer,
    #[serde(default, alias = "bookingDate")]
    pub date: String,
    #[serde(default)]
    pub time_slot: String,
    #[serde(default)]
    pub status: String,
}

/// `GET /api/pharmacy/getbookings/{vendorId}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookingsResponse {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}
