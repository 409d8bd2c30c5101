use crate::shared::api::{get_json, ApiError, FetchController};
use contracts::domain::a007_coupon::{Coupon, CouponsResponse};

pub async fn fetch_coupons(
    vendor_id: &str,
    controller: &FetchController,
) -> Result<Vec<Coupon>, ApiError> {
    let response: CouponsResponse =
        get_json(&format!("/api/vendor/getcoupons/{vendor_id}"), controller).await?;
    Ok(response.coupons)
}
