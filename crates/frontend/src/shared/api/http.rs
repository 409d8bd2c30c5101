//! Thin JSON helpers over gloo-net for the platform API.

use super::abort::FetchController;
use super::base::api_url;
use super::error::ApiError;
use contracts::domain::common::ApiMessage;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    controller: &FetchController,
) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .abort_signal(controller.signal().as_ref())
        .send()
        .await
        .map_err(|e| controller.classify_send_error(e))?;
    parse_response(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    controller: &FetchController,
) -> Result<T, ApiError> {
    let response = Request::put(&api_url(path))
        .abort_signal(controller.signal().as_ref())
        .json(body)
        .map_err(|e| ApiError::Transport(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| controller.classify_send_error(e))?;
    parse_response(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    controller: &FetchController,
) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .abort_signal(controller.signal().as_ref())
        .json(body)
        .map_err(|e| ApiError::Transport(format!("failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| controller.classify_send_error(e))?;
    parse_response(response).await
}

/// 2xx bodies decode into `T`; anything else is an application error whose
/// `{message}` body (when present) becomes the display string.
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let status = response.status();
    let message = match response.json::<ApiMessage>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => format!("Server error: {status}"),
    };
    Err(ApiError::Api { status, message })
}
