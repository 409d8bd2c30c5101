use crate::shared::api::{get_json, ApiError, FetchController};
use contracts::domain::a004_medicine::{Medicine, MedicinesResponse};

pub async fn fetch_medicines(
    vendor_id: &str,
    controller: &FetchController,
) -> Result<Vec<Medicine>, ApiError> {
    let response: MedicinesResponse =
        get_json(&format!("/api/vendor/getmedicines/{vendor_id}"), controller).await?;
    Ok(response.medicines)
}
