pub mod date_input;
pub mod pagination_controls;
pub mod status_badge;

pub use date_input::DateInput;
pub use pagination_controls::PaginationControls;
pub use status_badge::StatusBadge;
