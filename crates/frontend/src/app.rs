use crate::layout::shell::AppShell;
use crate::session::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}
