use crate::domain::a001_order::api;
use crate::domain::a001_order::bucket::OrderBucket;
use crate::domain::a001_order::status_flow::StatusFlow;
use crate::domain::a001_order::ui::details::OrderDetailsModal;
use crate::session::use_session;
use crate::shared::api::{ApiError, RequestScope};
use crate::shared::components::{DateInput, PaginationControls, StatusBadge};
use crate::shared::export::csv::to_csv;
use crate::shared::export::download::download_text;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use contracts::domain::a001_order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Order list for one bucket: search, date bounds, pagination, CSV export,
/// the status-change dialog, and the order details view.
#[component]
pub fn OrderListPage(bucket: OrderBucket) -> impl IntoView {
    let session = use_session();
    let vendor_id = StoredValue::new(
        session
            .get_untracked()
            .vendor()
            .map(|v| v.vendor_id.clone())
            .unwrap_or_default(),
    );

    let controller = ListController::<Order>::new(Some(bucket.day_of()));
    let load_scope = RequestScope::new();
    let submit_scope = RequestScope::new();

    let flow = RwSignal::new(StatusFlow::Idle);
    let status_options = RwSignal::new(Vec::<OrderStatus>::new());
    let details_for = RwSignal::new(None::<String>);

    let load = move || {
        let id = vendor_id.get_value();
        if id.is_empty() {
            return;
        }
        controller.begin_load();
        let ctl = load_scope.begin();
        spawn_local(async move {
            let result = api::fetch_orders(bucket, &id, &ctl).await;
            controller.finish_load(result);
        });
    };

    let is_loaded = StoredValue::new(false);
    Effect::new(move |_| {
        if !is_loaded.get_value() {
            is_loaded.set_value(true);
            load();
        }
    });

    let submit_status = move || {
        let (next, payload) = flow.get_untracked().begin_submit();
        flow.set(next);
        let Some((order_id, proposed)) = payload else {
            return;
        };
        let id = vendor_id.get_value();
        let ctl = submit_scope.begin();
        spawn_local(async move {
            match api::update_order_status(&id, &order_id, proposed, &ctl).await {
                Ok(_) => {
                    flow.set(flow.get_untracked().complete());
                    controller.patch_items(
                        |order| {
                            if order.id == order_id {
                                order.status = proposed;
                            }
                        },
                        |order| bucket.contains(order.status),
                    );
                }
                Err(ApiError::Cancelled) => {}
                Err(e) => flow.set(flow.get_untracked().fail(&e.to_string())),
            }
        });
    };

    let export_csv = move |_| {
        let csv = to_csv(&controller.filtered());
        if let Err(e) = download_text(&csv, "text/csv;charset=utf-8", bucket.csv_filename()) {
            log::warn!("csv export failed: {e}");
            controller.error.set(Some(e));
        }
    };

    view! {
        <div class="panel">
            <div class="panel-header">
                <h1 class="panel-title">
                    {icon(bucket.icon_name())}
                    {bucket.title()}
                    <span class="panel-count">
                        {move || format!("({})", controller.filtered().len())}
                    </span>
                </h1>
                <div class="panel-actions">
                    <button class="button" on:click=export_csv title="Export filtered list">
                        {icon("download")}
                        " Export CSV"
                    </button>
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
                    placeholder="Search by customer, mobile, order id..."
                    prop:value=move || controller.query.get()
                    on:input=move |ev| controller.set_query(event_target_value(&ev))
                />
                <label>{bucket.date_label()} " from"</label>
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
                    .then(|| view! { <div class="banner">"Loading orders..."</div> })
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Customer"</th>
                        <th>"Mobile"</th>
                        <th>"Items"</th>
                        <th>"Total"</th>
                        <th>"Payment"</th>
                        <th>"Status"</th>
                        <th>{bucket.date_label()}</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = controller.page_items();
                        if items.is_empty() && !controller.loading.get() {
                            return view! {
                                <tr>
                                    <td colspan="9" class="data-table-empty">"No orders found"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        items
                            .into_iter()
                            .map(|order| {
                                let details_id = order.id.clone();
                                let edit_id = order.id.clone();
                                let current = order.status;
                                let day = bucket.day_of()(&order);
                                let date_text = day
                                    .map(|d| d.format("%d/%m/%Y").to_string())
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr>
                                        <td class="mono">{order.id.clone()}</td>
                                        <td>{order.customer.name.clone()}</td>
                                        <td>{order.customer.mobile.clone()}</td>
                                        <td>{order.items.len()}</td>
                                        <td>{format_money(order.grand_total)}</td>
                                        <td>{order.payment_method.clone()}</td>
                                        <td><StatusBadge status=Signal::derive(move || current) /></td>
                                        <td>{date_text}</td>
                                        <td>
                                            <button
                                                class="button button--ghost"
                                                title="Change status"
                                                on:click=move |_| {
                                                    status_options.set(bucket.status_options(current));
                                                    flow.set(flow.get_untracked().open(&edit_id, current));
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="button button--ghost"
                                                title="Order details"
                                                on:click=move |_| details_for.set(Some(details_id.clone()))
                                            >
                                                "View"
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

            <PaginationControls
                current_page=Signal::derive(move || controller.page.get())
                total_pages=Signal::derive(move || controller.total_pages())
                total_count=Signal::derive(move || controller.filtered().len())
                page_size=Signal::derive(move || controller.page_size.get())
                on_page_change=Callback::new(move |page| controller.go_to_page(page))
                on_page_size_change=Callback::new(move |size| controller.set_page_size(size))
            />
        </div>

        {move || {
            flow.get()
                .is_open()
                .then(|| {
                    let modal_title = String::from("Update order status");
                    view! {
                        <Modal
                            title=modal_title
                            on_close=Callback::new(move |_| flow.set(flow.get_untracked().close()))
                        >
                            <div class="form-field">
                                <label>"New status"</label>
                                <select
                                    class="text-input"
                                    disabled=move || flow.get().is_submitting()
                                    on:change=move |ev| {
                                        if let Some(status) = OrderStatus::from_str_loose(
                                            &event_target_value(&ev),
                                        ) {
                                            flow.set(flow.get_untracked().propose(status));
                                        }
                                    }
                                >
                                    {status_options
                                        .get()
                                        .into_iter()
                                        .map(|status| {
                                            view! {
                                                <option
                                                    value=status.as_str()
                                                    selected=move || {
                                                        flow.get().proposed() == Some(status)
                                                    }
                                                >
                                                    {status.as_str()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            {move || {
                                flow.get()
                                    .error()
                                    .map(|e| {
                                        view! {
                                            <div class="banner banner--error">{e.to_string()}</div>
                                        }
                                    })
                            }}
                            <div style="display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;">
                                <button
                                    class="button"
                                    disabled=move || flow.get().is_submitting()
                                    on:click=move |_| flow.set(flow.get_untracked().close())
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="button button--primary"
                                    disabled=move || flow.get().is_submitting()
                                    on:click=move |_| submit_status()
                                >
                                    {move || {
                                        if flow.get().is_submitting() { "Saving..." } else { "Save" }
                                    }}
                                </button>
                            </div>
                        </Modal>
                    }
                })
        }}

        {move || {
            details_for
                .get()
                .map(|order_id| {
                    view! {
                        <OrderDetailsModal
                            order_id=order_id
                            on_close=Callback::new(move |_| details_for.set(None))
                        />
                    }
                })
        }}
    }
}
