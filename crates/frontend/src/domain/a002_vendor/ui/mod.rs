use super::api;
use crate::session::{update_session, use_session, VendorSession};
use crate::shared::api::{ApiError, RequestScope};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_vendor::{BankDetails, UpdateVendorProfileRequest, VendorProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Client-side checks before the profile PUT goes out.
fn validate_profile(request: &UpdateVendorProfileRequest) -> Result<(), String> {
    if request.name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err("A valid email is required".to_string());
    }
    if request.phone.trim().is_empty() {
        return Err("Phone is required".to_string());
    }
    if request.pharmacy_name.trim().is_empty() {
        return Err("Pharmacy name is required".to_string());
    }
    Ok(())
}

fn validate_bank(details: &BankDetails) -> Result<(), String> {
    if details.account_holder.trim().is_empty() {
        return Err("Account holder is required".to_string());
    }
    if details.account_number.trim().is_empty() {
        return Err("Account number is required".to_string());
    }
    if details.ifsc_code.trim().is_empty() {
        return Err("IFSC code is required".to_string());
    }
    if details.bank_name.trim().is_empty() {
        return Err("Bank name is required".to_string());
    }
    Ok(())
}

/// Vendor profile: contact details, pharmacy details, and payout accounts.
/// A successful save also refreshes the session so the topbar follows.
#[component]
pub fn VendorProfilePage() -> impl IntoView {
    let session = use_session();
    let vendor_id = StoredValue::new(
        session
            .get_untracked()
            .vendor()
            .map(|v| v.vendor_id.clone())
            .unwrap_or_default(),
    );

    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let pharmacy_name = RwSignal::new(String::new());
    let pharmacy_location = RwSignal::new(String::new());
    let pharmacy_image = RwSignal::new(String::new());
    let bank_accounts = RwSignal::new(Vec::<BankDetails>::new());

    // None = closed, Some(empty id) = add, Some(existing id) = edit.
    // Field values live in their own signals so typing does not rebuild
    // the modal.
    let bank_editing = RwSignal::new(None::<String>);
    let bank_holder = RwSignal::new(String::new());
    let bank_number = RwSignal::new(String::new());
    let bank_ifsc = RwSignal::new(String::new());
    let bank_name = RwSignal::new(String::new());
    let bank_error = RwSignal::new(None::<String>);
    let bank_saving = RwSignal::new(false);

    let load_scope = RequestScope::new();
    let save_scope = RequestScope::new();

    let apply_profile = move |vendor: VendorProfile| {
        name.set(vendor.name);
        email.set(vendor.email);
        phone.set(vendor.phone);
        pharmacy_name.set(vendor.pharmacy_name);
        pharmacy_location.set(vendor.pharmacy_location);
        pharmacy_image.set(vendor.pharmacy_image);
        bank_accounts.set(vendor.bank_details);
    };

    let load = move || {
        let id = vendor_id.get_value();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        error.set(None);
        let ctl = load_scope.begin();
        spawn_local(async move {
            match api::fetch_profile(&id, &ctl).await {
                Ok(vendor) => {
                    apply_profile(vendor);
                    loading.set(false);
                }
                Err(ApiError::Cancelled) => {}
                Err(e) => {
                    log::warn!("profile load failed: {e}");
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let is_loaded = StoredValue::new(false);
    Effect::new(move |_| {
        if !is_loaded.get_value() {
            is_loaded.set_value(true);
            load();
        }
    });

    let save_profile = move |_| {
        if saving.get_untracked() {
            return;
        }
        notice.set(None);
        let request = UpdateVendorProfileRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            pharmacy_name: pharmacy_name.get_untracked(),
            pharmacy_location: pharmacy_location.get_untracked(),
        };
        if let Err(e) = validate_profile(&request) {
            error.set(Some(e));
            return;
        }
        error.set(None);
        saving.set(true);
        let id = vendor_id.get_value();
        let ctl = save_scope.begin();
        spawn_local(async move {
            match api::update_profile(&id, &request, &ctl).await {
                Ok(_) => {
                    update_session(
                        session,
                        VendorSession {
                            vendor_id: id,
                            vendor_name: request.name,
                            vendor_email: request.email,
                            vendor_phone: request.phone,
                            pharmacy_name: request.pharmacy_name,
                            pharmacy_image: pharmacy_image.get_untracked(),
                            pharmacy_location: request.pharmacy_location,
                        },
                    );
                    notice.set(Some("Profile updated".to_string()));
                    saving.set(false);
                }
                Err(ApiError::Cancelled) => {}
                Err(e) => {
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    };

    let save_bank = move |_| {
        if bank_saving.get_untracked() {
            return;
        }
        let Some(bank_id) = bank_editing.get_untracked() else {
            return;
        };
        let details = BankDetails {
            id: bank_id,
            account_holder: bank_holder.get_untracked(),
            account_number: bank_number.get_untracked(),
            ifsc_code: bank_ifsc.get_untracked(),
            bank_name: bank_name.get_untracked(),
        };
        if let Err(e) = validate_bank(&details) {
            bank_error.set(Some(e));
            return;
        }
        bank_error.set(None);
        bank_saving.set(true);
        let id = vendor_id.get_value();
        let ctl = save_scope.begin();
        spawn_local(async move {
            let result = if details.id.is_empty() {
                api::add_bank_details(&id, &details, &ctl).await
            } else {
                api::edit_bank_details(&id, &details.id, &details, &ctl).await
            };
            match result {
                Ok(_) => {
                    bank_saving.set(false);
                    bank_editing.set(None);
                    // The server assigns ids; refetch instead of guessing.
                    load();
                }
                Err(ApiError::Cancelled) => {}
                Err(e) => {
                    bank_error.set(Some(e.to_string()));
                    bank_saving.set(false);
                }
            }
        });
    };

    let field = move |label: &'static str, signal: RwSignal<String>| {
        view! {
            <div class="form-field">
                <label>{label}</label>
                <input
                    type="text"
                    class="text-input"
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="panel">
            <div class="panel-header">
                <h1 class="panel-title">{icon("profile")} "Profile"</h1>
                <div class="panel-actions">
                    <button class="button" on:click=move |_| load() title="Reload">
                        {icon("refresh")}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="banner banner--error">{e}</div> })}
            {move || notice.get().map(|n| view! { <div class="banner banner--success">{n}</div> })}
            {move || loading.get().then(|| view! { <div class="banner">"Loading profile..."</div> })}

            <div class="form-grid">
                {field("Name", name)}
                {field("Email", email)}
                {field("Phone", phone)}
                {field("Pharmacy name", pharmacy_name)}
                {field("Pharmacy location", pharmacy_location)}
            </div>
            <div style="margin-top: 16px;">
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || loading.get()
                    on:click=save_profile
                >
                    {move || if saving.get() { "Saving..." } else { "Save profile" }}
                </button>
            </div>

            <div class="panel-header" style="margin-top: 32px;">
                <h2 class="panel-title">"Bank accounts"</h2>
                <div class="panel-actions">
                    <button
                        class="button"
                        on:click=move |_| {
                            bank_error.set(None);
                            bank_holder.set(String::new());
                            bank_number.set(String::new());
                            bank_ifsc.set(String::new());
                            bank_name.set(String::new());
                            bank_editing.set(Some(String::new()));
                        }
                    >
                        "Add account"
                    </button>
                </div>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Account holder"</th>
                        <th>"Account number"</th>
                        <th>"IFSC"</th>
                        <th>"Bank"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let accounts = bank_accounts.get();
                        if accounts.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="5" class="data-table-empty">"No bank accounts"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        accounts
                            .into_iter()
                            .map(|account| {
                                let editable = account.clone();
                                view! {
                                    <tr>
                                        <td>{account.account_holder.clone()}</td>
                                        <td class="mono">{account.account_number.clone()}</td>
                                        <td class="mono">{account.ifsc_code.clone()}</td>
                                        <td>{account.bank_name.clone()}</td>
                                        <td>
                                            <button
                                                class="button button--ghost"
                                                title="Edit account"
                                                on:click=move |_| {
                                                    bank_error.set(None);
                                                    bank_holder.set(editable.account_holder.clone());
                                                    bank_number.set(editable.account_number.clone());
                                                    bank_ifsc.set(editable.ifsc_code.clone());
                                                    bank_name.set(editable.bank_name.clone());
                                                    bank_editing.set(Some(editable.id.clone()));
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>

        {move || {
            bank_editing
                .get()
                .map(|bank_id| {
                    let title = if bank_id.is_empty() {
                        "Add bank account"
                    } else {
                        "Edit bank account"
                    };
                    view! {
                        <Modal
                            title=title.to_string()
                            on_close=Callback::new(move |_| bank_editing.set(None))
                        >
                            <div class="form-grid">
                                {field("Account holder", bank_holder)}
                                {field("Account number", bank_number)}
                                {field("IFSC code", bank_ifsc)}
                                {field("Bank name", bank_name)}
                            </div>
                            {move || {
                                bank_error
                                    .get()
                                    .map(|e| view! { <div class="banner banner--error">{e}</div> })
                            }}
                            <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;">
                                <button
                                    class="button"
                                    on:click=move |_| bank_editing.set(None)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="button button--primary"
                                    disabled=move || bank_saving.get()
                                    on:click=save_bank
                                >
                                    {move || if bank_saving.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </Modal>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> UpdateVendorProfileRequest {
        UpdateVendorProfileRequest {
            name: "Sharma Medicos".into(),
            email: "owner@sharma.example".into(),
            phone: "9812345678".into(),
            pharmacy_name: "Sharma Pharmacy".into(),
            pharmacy_location: "MG Road".into(),
        }
    }

    #[test]
    fn complete_profile_passes_validation() {
        assert!(validate_profile(&request()).is_ok());
    }

    #[test]
    fn blank_or_malformed_fields_are_rejected() {
        let mut r = request();
        r.name = "  ".into();
        assert!(validate_profile(&r).is_err());

        let mut r = request();
        r.email = "not-an-email".into();
        assert!(validate_profile(&r).is_err());

        let mut r = request();
        r.phone = String::new();
        assert!(validate_profile(&r).is_err());
    }

    #[test]
    fn bank_details_require_every_field() {
        let details = BankDetails {
            id: String::new(),
            account_holder: "Sharma Medicos".into(),
            account_number: "1234567890".into(),
            ifsc_code: "HDFC0001234".into(),
            bank_name: "HDFC".into(),
        };
        assert!(validate_bank(&details).is_ok());

        let mut missing = details.clone();
        missing.ifsc_code = String::new();
        assert!(validate_bank(&missing).is_err());
    }
}
