use crate::shared::api::{get_json, ApiError, FetchController};
use contracts::domain::a006_booking::{Booking, BookingsResponse};

pub async fn fetch_bookings(
    vendor_id: &str,
    controller: &FetchController,
) -> Result<Vec<Booking>, ApiError> {
    let response: BookingsResponse = get_json(
        &format!("/api/pharmacy/getbookings/{vendor_id}"),
        controller,
    )
    .await?;
    Ok(response.bookings)
}
