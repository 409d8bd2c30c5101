use super::api;
use crate::session::use_session;
use crate::shared::api::RequestScope;
use crate::shared::components::PaginationControls;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use contracts::domain::a004_medicine::Medicine;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MedicineListPage() -> impl IntoView {
    let session = use_session();
    let vendor_id = StoredValue::new(
        session
            .get_untracked()
            .vendor()
            .map(|v| v.vendor_id.clone())
            .unwrap_or_default(),
    );
    let controller = ListController::<Medicine>::new(None);
    let scope = RequestScope::new();

    let load = move || {
        let id = vendor_id.get_value();
        if id.is_empty() {
            return;
        }
        controller.begin_load();
        let ctl = scope.begin();
        spawn_local(async move {
            controller.finish_load(api::fetch_medicines(&id, &ctl).await);
        });
    };

    let is_loaded = StoredValue::new(false);
    Effect::new(move |_| {
        if !is_loaded.get_value() {
            is_loaded.set_value(true);
            load();
        }
    });

    view! {
        <div class="panel">
            <div class="panel-header">
                <h1 class="panel-title">
                    {icon("medicines")}
                    "Medicines"
                    <span class="panel-count">
                        {move || format!("({})", controller.filtered().len())}
                    </span>
                </h1>
                <div class="panel-actions">
                    <button class="button" on:click=move |_| load() title="Reload">
                        {icon("refresh")}
                    </button>
                </div>
            </div>

            <div class="toolbar">
                <input
                    type="text"
                    class="text-input"
                    style="width: 260px;"
                    placeholder="Search by name or category..."
                    prop:value=move || controller.query.get()
                    on:input=move |ev| controller.set_query(event_target_value(&ev))
                />
            </div>

            {move || {
                controller
                    .error
                    .get()
                    .map(|e| view! { <div class="banner banner--error">{e}</div> })
            }}
            {move || {
                controller
                    .loading
                    .get()
                    .then(|| view! { <div class="banner">"Loading medicines..."</div> })
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = controller.page_items();
                        if items.is_empty() && !controller.loading.get() {
                            return view! {
                                <tr>
                                    <td colspan="4" class="data-table-empty">"No medicines found"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        items
                            .into_iter()
                            .map(|medicine| {
                                view! {
                                    <tr>
                                        <td>{medicine.name.clone()}</td>
                                        <td>{medicine.category.clone()}</td>
                                        <td>{format_money(medicine.price)}</td>
                                        <td>{medicine.stock}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>

            <PaginationControls
                current_page=Signal::derive(move || controller.page.get())
                total_pages=Signal::derive(move || controller.total_pages())
                total_count=Signal::derive(move || controller.filtered().len())
                page_size=Signal::derive(move || controller.page_size.get())
                on_page_change=Callback::new(move |page| controller.go_to_page(page))
                on_page_size_change=Callback::new(move |size| controller.set_page_size(size))
            />
        </div>
    }
}
