//! localStorage access for the vendor session.
//!
//! The keys are the ones the platform's login flow writes; everything above
//! this module works with the typed [`VendorSession`](super::VendorSession)
//! instead of raw storage reads.

use super::VendorSession;

const VENDOR_ID_KEY: &str = "vendorId";
const VENDOR_NAME_KEY: &str = "vendorName";
const VENDOR_EMAIL_KEY: &str = "vendorEmail";
const VENDOR_PHONE_KEY: &str = "vendorPhone";
const PHARMACY_NAME_KEY: &str = "pharmacyName";
const PHARMACY_IMAGE_KEY: &str = "pharmacyImage";
const PHARMACY_LOCATION_KEY: &str = "pharmacyLocation";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read(key: &str) -> String {
    local_storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .unwrap_or_default()
}

/// Restore the vendor session. Returns `None` unless a vendor id is present.
pub fn load() -> Option<VendorSession> {
    let vendor_id = read(VENDOR_ID_KEY);
    if vendor_id.is_empty() {
        return None;
    }
    Some(VendorSession {
        vendor_id,
        vendor_name: read(VENDOR_NAME_KEY),
        vendor_email: read(VENDOR_EMAIL_KEY),
        vendor_phone: read(VENDOR_PHONE_KEY),
        pharmacy_name: read(PHARMACY_NAME_KEY),
        pharmacy_image: read(PHARMACY_IMAGE_KEY),
        pharmacy_location: read(PHARMACY_LOCATION_KEY),
    })
}

/// Persist session fields that profile edits may change.
pub fn save(session: &VendorSession) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(VENDOR_ID_KEY, &session.vendor_id);
        let _ = storage.set_item(VENDOR_NAME_KEY, &session.vendor_name);
        let _ = storage.set_item(VENDOR_EMAIL_KEY, &session.vendor_email);
        let _ = storage.set_item(VENDOR_PHONE_KEY, &session.vendor_phone);
        let _ = storage.set_item(PHARMACY_NAME_KEY, &session.pharmacy_name);
        let _ = storage.set_item(PHARMACY_IMAGE_KEY, &session.pharmacy_image);
        let _ = storage.set_item(PHARMACY_LOCATION_KEY, &session.pharmacy_location);
    }
}
