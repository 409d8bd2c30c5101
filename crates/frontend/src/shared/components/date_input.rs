use leptos::prelude::*;

/// Native date picker bound to a yyyy-mm-dd string signal.
/// The browser renders the value in locale format.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format; empty means unset
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="text-input"
            style="width: 140px;"
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
