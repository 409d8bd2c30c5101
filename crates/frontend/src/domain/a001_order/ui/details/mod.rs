use crate::domain::a001_order::api;
use crate::session::use_session;
use crate::shared::api::{ApiError, RequestScope};
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::download::download_bytes;
use crate::shared::export::pdf::render_invoice;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Full order view: line items, amounts, payment, rider, status history,
/// and the invoice PDF download. Fetches the order fresh so the view never
/// shows a stale row, then resolves the customer when the order only
/// carried a bare user id.
#[component]
pub fn OrderDetailsModal(order_id: String, on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let pharmacy = session
        .get_untracked()
        .vendor()
        .map(|v| (v.pharmacy_name.clone(), v.pharmacy_location.clone()))
        .unwrap_or_default();
    let pharmacy = StoredValue::new(pharmacy);

    let order = RwSignal::new(None::<Order>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let scope = RequestScope::new();

    {
        let order_id = order_id.clone();
        let ctl = scope.begin();
        spawn_local(async move {
            let mut fetched = match api::fetch_single_order(&order_id, &ctl).await {
                Ok(order) => order,
                Err(ApiError::Cancelled) => return,
                Err(e) => {
                    log::warn!("order fetch failed: {e}");
                    error.set(Some(e.to_string()));
                    loading.set(false);
                    return;
                }
            };
            // Some endpoints return the buyer as a bare id; resolve it so
            // the header shows a name instead of an id.
            if fetched.customer.needs_lookup() {
                if let Some(user_id) = fetched.customer.id.clone() {
                    match api::fetch_single_user(&user_id, &ctl).await {
                        Ok(user) => {
                            fetched.customer.name = user.name;
                            fetched.customer.mobile = user.mobile;
                        }
                        Err(ApiError::Cancelled) => return,
                        // The order itself is still displayable.
                        Err(_) => {}
                    }
                }
            }
            order.set(Some(fetched));
            loading.set(false);
        });
    }

    let download_invoice = move |_| {
        if let Some(order) = order.get_untracked() {
            let (name, location) = pharmacy.get_value();
            let bytes = render_invoice(&order, &name, &location);
            let filename = format!("invoice_{}.pdf", order.id);
            if let Err(e) = download_bytes(&bytes, "application/pdf", &filename) {
                log::warn!("invoice download failed: {e}");
                error.set(Some(e));
            }
        }
    };

    view! {
        <Modal title=format!("Order {order_id}") on_close=on_close>
            <div style="display: flex; justify-content: flex-end; margin-bottom: 12px;">
                <button
                    class="button"
                    disabled=move || order.get().is_none()
                    on:click=download_invoice
                >
                    {icon("download")}
                    " Invoice PDF"
                </button>
            </div>
            {move || error.get().map(|e| view! { <div class="banner banner--error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="banner">"Loading order..."</div> })}
            {move || {
                order
                    .get()
                    .map(|order| {
                        let status = order.status;
                        view! {
                            <div class="details-grid">
                                <section class="details-block">
                                    <h3>"Customer"</h3>
                                    <p>{order.customer.name.clone()}</p>
                                    <p>{order.customer.mobile.clone()}</p>
                                    <p>{order.delivery_address.clone()}</p>
                                </section>
                                <section class="details-block">
                                    <h3>"Payment"</h3>
                                    <p>{order.payment_method.clone()}</p>
                                    <p>{order.payment_status.clone()}</p>
                                    <p>
                                        "Status: "
                                        <StatusBadge status=Signal::derive(move || status) />
                                    </p>
                                    <p>
                                        {order
                                            .rider
                                            .is_assigned()
                                            .then(|| format!("Rider: {}", order.rider.name))}
                                    </p>
                                </section>
                            </div>

                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Item"</th>
                                        <th>"Qty"</th>
                                        <th>"Price"</th>
                                        <th>"Amount"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {order
                                        .items
                                        .iter()
                                        .map(|line| {
                                            view! {
                                                <tr>
                                                    <td>{line.name.clone()}</td>
                                                    <td>{line.quantity}</td>
                                                    <td>{format_money(line.price)}</td>
                                                    <td>{format_money(line.line_total())}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>

                            <div class="totals-block">
                                <p>"Subtotal: " {format_money(order.subtotal)}</p>
                                <p>"Delivery: " {format_money(order.delivery_charge)}</p>
                                <p>"Discount: " {format_money(order.discount)}</p>
                                <p class="totals-grand">
                                    "Grand total: " {format_money(order.grand_total)}
                                </p>
                            </div>

                            {(!order.status_history.is_empty())
                                .then(|| {
                                    view! {
                                        <section class="details-block">
                                            <h3>"Status history"</h3>
                                            <ul class="history-list">
                                                {order
                                                    .status_history
                                                    .iter()
                                                    .map(|event| {
                                                        view! {
                                                            <li>
                                                                <span class="mono">
                                                                    {format_datetime(&event.timestamp)}
                                                                </span>
                                                                " " {event.status.clone()}
                                                                {(!event.message.is_empty())
                                                                    .then(|| format!(" - {}", event.message))}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </section>
                                    }
                                })}
                        }
                    })
            }}
        </Modal>
    }
}
