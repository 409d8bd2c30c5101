use serde::{Deserialize, Serialize};

/// A medicine category.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "categoryName")]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// `GET /api/vendor/getcategories/{vendorId}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<Category>,
}
