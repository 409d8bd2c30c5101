pub mod abort;
pub mod base;
pub mod error;
pub mod http;

pub use abort::{FetchController, RequestScope, REQUEST_TIMEOUT_MS};
pub use base::{api_base, api_url};
pub use error::ApiError;
pub use http::{get_json, post_json, put_json};
