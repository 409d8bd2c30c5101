use serde::{Deserialize, Serialize};

/// A medicine listed by the vendor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "medicineName")]
    pub name: String,
    #[serde(default, alias = "categoryName")]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "quantity")]
    pub stock: u32,
    #[serde(default)]
    pub image: String,
}

/// `GET /api/vendor/getmedicines/{vendorId}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MedicinesResponse {
    #[serde(default)]
    pub medicines: Vec<Medicine>,
}
