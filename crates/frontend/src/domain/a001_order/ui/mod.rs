pub mod details;
pub mod list;

pub use details::OrderDetailsModal;
pub use list::OrderListPage;
