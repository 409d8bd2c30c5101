//! Browser file downloads via a Blob and a temporary anchor element.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub fn download_text(content: &str, mime: &str, filename: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to create blob")?;
    download_blob(&blob, filename)
}

pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to create blob")?;
    download_blob(&blob, filename)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let url = Url::create_object_url_with_blob(blob).map_err(|_| "Failed to create URL")?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create element")?
        .dyn_into()
        .map_err(|_| "Failed to cast to anchor")?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);

    Ok(())
}
