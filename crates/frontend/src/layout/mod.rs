pub mod shell;
pub mod sidebar;

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    #[default]
    PendingOrders,
    DeliveredOrders,
    Medicines,
    Categories,
    Pharmacies,
    Bookings,
    Coupons,
    Profile,
}

impl ActivePage {
    pub const ALL: [ActivePage; 8] = [
        ActivePage::PendingOrders,
        ActivePage::DeliveredOrders,
        ActivePage::Medicines,
        ActivePage::Categories,
        ActivePage::Pharmacies,
        ActivePage::Bookings,
        ActivePage::Coupons,
        ActivePage::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivePage::PendingOrders => "Pending Orders",
            ActivePage::DeliveredOrders => "Delivered Orders",
            ActivePage::Medicines => "Medicines",
            ActivePage::Categories => "Categories",
            ActivePage::Pharmacies => "Pharmacies",
            ActivePage::Bookings => "Bookings",
            ActivePage::Coupons => "Coupons",
            ActivePage::Profile => "Profile",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActivePage::PendingOrders => "orders",
            ActivePage::DeliveredOrders => "delivered",
            ActivePage::Medicines => "medicines",
            ActivePage::Categories => "categories",
            ActivePage::Pharmacies => "pharmacies",
            ActivePage::Bookings => "bookings",
            ActivePage::Coupons => "coupons",
            ActivePage::Profile => "profile",
        }
    }
}
