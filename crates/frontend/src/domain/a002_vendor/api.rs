use crate::shared::api::{get_json, post_json, put_json, ApiError, FetchController};
use contracts::domain::a002_vendor::{
    BankDetails, UpdateVendorProfileRequest, VendorProfile, VendorProfileResponse,
};
use contracts::domain::common::ApiMessage;

pub async fn fetch_profile(
    vendor_id: &str,
    controller: &FetchController,
) -> Result<VendorProfile, ApiError> {
    let response: VendorProfileResponse = get_json(
        &format!("/api/vendor/getvendorprofile/{vendor_id}"),
        controller,
    )
    .await?;
    Ok(response.vendor)
}

pub async fn update_profile(
    vendor_id: &str,
    request: &UpdateVendorProfileRequest,
    controller: &FetchController,
) -> Result<ApiMessage, ApiError> {
    put_json(
        &format!("/api/vendor/updatevendorprofile/{vendor_id}"),
        request,
        controller,
    )
    .await
}

pub async fn add_bank_details(
    vendor_id: &str,
    details: &BankDetails,
    controller: &FetchController,
) -> Result<ApiMessage, ApiError> {
    post_json(
        &format!("/api/vendor/addbankdetails/{vendor_id}"),
        details,
        controller,
    )
    .await
}

pub async fn edit_bank_details(
    vendor_id: &str,
    bank_id: &str,
    details: &BankDetails,
    controller: &FetchController,
) -> Result<ApiMessage, ApiError> {
    put_json(
        &format!("/api/vendor/editbankdetails/{vendor_id}/{bank_id}"),
        details,
        controller,
    )
    .await
}
