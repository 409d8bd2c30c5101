use serde::{Deserialize, Serialize};

/// A discount coupon issued by the vendor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "couponCode")]
    pub code: String,
    #[serde(default, alias = "discountPercent")]
    pub discount: f64,
    #[serde(default, alias = "expiryDate")]
    pub expiry: String,
    #[serde(default)]
    pub min_order_amount: f64,
    #[serde(default)]
    pub is_active: bool,
}

/// `GET /api/vendor/getcoupons/{vendorId}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CouponsResponse {
    #[serde(default)]
    pub coupons: Vec<Coupon>,
}
