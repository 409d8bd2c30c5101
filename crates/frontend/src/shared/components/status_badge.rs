use contracts::domain::a001_order::OrderStatus;
use leptos::prelude::*;

fn status_style(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "background: #fff3e0; color: #e65100;",
        OrderStatus::Accepted => "background: #e3f2fd; color: #1565c0;",
        OrderStatus::RiderAssigned => "background: #ede7f6; color: #4527a0;",
        OrderStatus::Delivered => "background: #e8f5e9; color: #2e7d32;",
        OrderStatus::Rejected => "background: #ffebee; color: #c62828;",
        OrderStatus::Cancelled => "background: #f5f5f5; color: #616161;",
    }
}

/// Colored chip for an order's fulfillment status.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<OrderStatus>) -> impl IntoView {
    view! {
        <span
            class="status-badge"
            style=move || status_style(status.get())
        >
            {move || status.get().as_str()}
        </span>
    }
}
