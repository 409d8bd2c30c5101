use super::bucket::OrderBucket;
use crate::shared::api::{get_json, put_json, ApiError, FetchController};
use contracts::domain::a001_order::{
    Order, OrderStatus, OrdersResponse, PlatformUser, SingleOrderResponse, SingleUserResponse,
    UpdateStatusRequest,
};
use contracts::domain::common::ApiMessage;

pub async fn fetch_orders(
    bucket: OrderBucket,
    vendor_id: &str,
    controller: &FetchController,
) -> Result<Vec<Order>, ApiError> {
    let response: OrdersResponse = get_json(&bucket.endpoint(vendor_id), controller).await?;
    Ok(response.orders)
}

pub async fn update_order_status(
    vendor_id: &str,
    order_id: &str,
    status: OrderStatus,
    controller: &FetchController,
) -> Result<ApiMessage, ApiError> {
    put_json(
        &format!("/api/vendor/orderstatus/{vendor_id}/{order_id}"),
        &UpdateStatusRequest { status },
        controller,
    )
    .await
}

pub async fn fetch_single_order(
    order_id: &str,
    controller: &FetchController,
) -> Result<Order, ApiError> {
    let response: SingleOrderResponse =
        get_json(&format!("/api/admin/singleorder/{order_id}"), controller).await?;
    Ok(response.order)
}

pub async fn fetch_single_user(
    user_id: &str,
    controller: &FetchController,
) -> Result<PlatformUser, ApiError> {
    let response: SingleUserResponse =
        get_json(&format!("/api/admin/getsingleuser/{user_id}"), controller).await?;
    Ok(response.user)
}
