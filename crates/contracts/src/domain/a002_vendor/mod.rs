use serde::{Deserialize, Serialize};

/// Vendor (pharmacy account holder) profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfile {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "vendorName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "mobile")]
    pub phone: String,
    #[serde(default)]
    pub pharmacy_name: String,
    #[serde(default)]
    pub pharmacy_location: String,
    #[serde(default)]
    pub pharmacy_image: String,
    #[serde(default)]
    pub bank_details: Vec<BankDetails>,
}

/// Vendor payout information, edited via its own sub-form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub account_holder: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default, alias = "ifsc")]
    pub ifsc_code: String,
    #[serde(default)]
    pub bank_name: String,
}

/// `GET /api/vendor/getvendorprofile/{vendorId}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorProfileResponse {
    pub vendor: VendorProfile,
}

/// `PUT /api/vendor/updatevendorprofile/{vendorId}` body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendorProfileRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pharmacy_name: String,
    pub pharmacy_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_tolerates_missing_bank_details() {
        let vendor: VendorProfile = serde_json::from_str(
            r#"{"_id": "v-1", "name": "Sharma Medicos", "phone": "9812345678"}"#,
        )
        .unwrap();
        assert_eq!(vendor.name, "Sharma Medicos");
        assert!(vendor.bank_details.is_empty());
    }
}
