//! API base-URL resolution.
//!
//! The platform API host is configuration, not a hardcoded literal: an
//! operator can point the dashboard at another host by setting the
//! `apiBase` localStorage key; otherwise the window origin is used
//! (same-host deployment), with a development fallback.

const API_BASE_OVERRIDE_KEY: &str = "apiBase";
const DEV_API_BASE: &str = "http://localhost:5000";

/// Get the base URL for API requests
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return DEV_API_BASE.to_string(),
    };

    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(base)) = storage.get_item(API_BASE_OVERRIDE_KEY) {
            if !base.is_empty() {
                return base.trim_end_matches('/').to_string();
            }
        }
    }

    window
        .location()
        .origin()
        .unwrap_or_else(|_| DEV_API_BASE.to_string())
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
