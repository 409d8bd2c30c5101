use super::{api, booking_day};
use crate::session::use_session;
use crate::shared::api::RequestScope;
use crate::shared::components::{DateInput, PaginationControls};
use crate::shared::date_utils::format_date_or;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use contracts::domain::a006_booking::Booking;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn BookingListPage() -> impl IntoView {
    let session = use_session();
    let vendor_id = StoredValue::new(
        session
            .get_untracked()
            .vendor()
            .map(|v| v.vendor_id.clone())
            .unwrap_or_default(),
    );
    let controller = ListController::<Booking>::new(Some(booking_day));
    let scope = RequestScope::new();

    let load = move || {
        let id = vendor_id.get_value();
        if id.is_empty() {
            return;
        }
        controller.begin_load();
        let ctl = scope.begin();
        spawn_local(async move {
            controller.finish_load(api::fetch_bookings(&id, &ctl).await);
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
                    {icon("bookings")}
                    "Bookings"
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
                    placeholder="Search by customer or status..."
                    prop:value=move || controller.query.get()
                    on:input=move |ev| controller.set_query(event_target_value(&ev))
                />
                <label>"Booking date from"</label>
                <DateInput
                    value=Signal::derive(move || controller.date_from.get())
                    on_change=move |value| controller.set_date_from(value)
                />
                <label>"to"</label>
                <DateInput
                    value=Signal::derive(move || controller.date_to.get())
                    on_change=move |value| controller.set_date_to(value)
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
                    .then(|| view! { <div class="banner">"Loading bookings..."</div> })
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Customer"</th>
                        <th>"Mobile"</th>
                        <th>"Date"</th>
                        <th>"Time slot"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = controller.page_items();
                        if items.is_empty() && !controller.loading.get() {
                            return view! {
                                <tr>
                                    <td colspan="5" class="data-table-empty">"No bookings found"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        items
                            .into_iter()
                            .map(|booking| {
                                view! {
                                    <tr>
                                        <td>{booking.customer.name.clone()}</td>
                                        <td>{booking.customer.mobile.clone()}</td>
                                        <td>{format_date_or(&booking.date, "-")}</td>
                                        <td>{booking.time_slot.clone()}</td>
                                        <td>{booking.status.clone()}</td>
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
