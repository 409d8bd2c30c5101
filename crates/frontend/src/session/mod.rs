//! Typed vendor session, provided to the whole app via context.
//!
//! Replaces scattered localStorage reads with one explicit session object
//! and an explicit "not authenticated" variant.

pub mod storage;

use leptos::prelude::*;

/// Everything the login flow established for the current vendor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VendorSession {
    pub vendor_id: String,
    pub vendor_name: String,
    pub vendor_email: String,
    pub vendor_phone: String,
    pub pharmacy_name: String,
    pub pharmacy_image: String,
    pub pharmacy_location: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Active(VendorSession),
}

impl SessionState {
    pub fn vendor(&self) -> Option<&VendorSession> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Active(v) => Some(v),
        }
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(match storage::load() {
        Some(session) => SessionState::Active(session),
        None => SessionState::Anonymous,
    });

    provide_context(state);

    children()
}

/// Hook to access the session state
pub fn use_session() -> RwSignal<SessionState> {
    use_context::<RwSignal<SessionState>>().expect("SessionProvider not found in component tree")
}

/// Update the active session (after a profile edit) and persist it.
pub fn update_session(state: RwSignal<SessionState>, session: VendorSession) {
    storage::save(&session);
    state.set(SessionState::Active(session));
}
