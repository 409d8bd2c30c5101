use crate::shared::api::{get_json, ApiError, FetchController};
use contracts::domain::a003_pharmacy::{PharmaciesResponse, Pharmacy};

pub async fn fetch_pharmacies(
    vendor_id: &str,
    controller: &FetchController,
) -> Result<Vec<Pharmacy>, ApiError> {
    let response: PharmaciesResponse = get_json(
        &format!("/api/pharmacy/getpharmacies/{vendor_id}"),
        controller,
    )
    .await?;
    Ok(response.pharmacies)
}
