use super::ActivePage;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar(active: RwSignal<ActivePage>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Vendor Dashboard"</div>
            {ActivePage::ALL
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            class="sidebar__item"
                            class=("sidebar__item--active", move || active.get() == page)
                            on:click=move |_| active.set(page)
                        >
                            {icon(page.icon_name())}
                            <span>{page.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
