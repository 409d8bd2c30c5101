use serde::{Deserialize, Serialize};

/// A pharmacy storefront registered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "pharmacyName")]
    pub name: String,
    #[serde(default, alias = "pharmacyLocation")]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_active: bool,
}

/// `GET /api/pharmacy/getpharmacies/{vendorId}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PharmaciesResponse {
    #[serde(default)]
    pub pharmacies: Vec<Pharmacy>,
}
