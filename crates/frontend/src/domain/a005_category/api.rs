use crate::shared::api::{get_json, ApiError, FetchController};
use contracts::domain::a005_category::{CategoriesResponse, Category};

pub async fn fetch_categories(
    vendor_id: &str,
    controller: &FetchController,
) -> Result<Vec<Category>, ApiError> {
    let response: CategoriesResponse = get_json(
        &format!("/api/vendor/getcategories/{vendor_id}"),
        controller,
    )
    .await?;
    Ok(response.categories)
}
