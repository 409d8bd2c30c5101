pub mod api;
pub mod bucket;
pub mod status_flow;
pub mod ui;

use crate::shared::date_utils::format_date_or;
use crate::shared::export::csv::CsvExportable;
use crate::shared::format::format_amount;
use crate::shared::list_query::Searchable;
use contracts::domain::a001_order::Order;

impl Searchable for Order {
    fn search_haystacks(&self) -> Vec<String> {
        vec![
            self.customer.name.clone(),
            self.customer.mobile.clone(),
            self.id.clone(),
            self.rider.name.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec![
            "Order Id",
            "Customer",
            "Mobile",
            "Items",
            "Subtotal",
            "Delivery Charge",
            "Discount",
            "Grand Total",
            "Payment Method",
            "Payment Status",
            "Status",
            "Rider",
            "Created",
            "Updated",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer.name.clone(),
            self.customer.mobile.clone(),
            self.items.len().to_string(),
            format_amount(self.subtotal),
            format_amount(self.delivery_charge),
            format_amount(self.discount),
            format_amount(self.grand_total),
            self.payment_method.clone(),
            self.payment_status.clone(),
            self.status.as_str().to_string(),
            self.rider.name.clone(),
            format_date_or(&self.created_at, ""),
            format_date_or(&self.updated_at, ""),
        ]
    }
}
