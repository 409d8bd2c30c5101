use super::sidebar::Sidebar;
use super::ActivePage;
use crate::domain::a001_order::bucket::OrderBucket;
use crate::domain::a001_order::ui::OrderListPage;
use crate::domain::a002_vendor::ui::VendorProfilePage;
use crate::domain::a003_pharmacy::ui::PharmacyListPage;
use crate::domain::a004_medicine::ui::MedicineListPage;
use crate::domain::a005_category::ui::CategoryListPage;
use crate::domain::a006_booking::ui::BookingListPage;
use crate::domain::a007_coupon::ui::CouponListPage;
use crate::session::{use_session, SessionState};
use leptos::prelude::*;

/// Dashboard frame: sidebar navigation, topbar with the signed-in pharmacy,
/// and the active screen. Without a session only a sign-in hint renders.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();
    let active = RwSignal::new(ActivePage::default());

    view! {
        {move || match session.get() {
            SessionState::Anonymous => {
                view! {
                    <div class="anonymous-screen">
                        <h1>"No vendor session"</h1>
                        <p>"Sign in from the marketplace app to open the dashboard."</p>
                    </div>
                }
                    .into_any()
            }
            SessionState::Active(vendor) => {
                view! {
                    <div class="shell">
                        <Sidebar active=active />
                        <div class="content">
                            <header class="topbar">
                                <h1 class="topbar__title">
                                    {move || active.get().label()}
                                </h1>
                                <span class="topbar__vendor">
                                    {vendor.pharmacy_name.clone()}
                                    {(!vendor.vendor_name.is_empty())
                                        .then(|| format!(" ({})", vendor.vendor_name))}
                                </span>
                            </header>
                            <main>
                                {move || match active.get() {
                                    ActivePage::PendingOrders => {
                                        view! { <OrderListPage bucket=OrderBucket::Pending /> }
                                            .into_any()
                                    }
                                    ActivePage::DeliveredOrders => {
                                        view! { <OrderListPage bucket=OrderBucket::Delivered /> }
                                            .into_any()
                                    }
                                    ActivePage::Medicines => {
                                        view! { <MedicineListPage /> }.into_any()
                                    }
                                    ActivePage::Categories => {
                                        view! { <CategoryListPage /> }.into_any()
                                    }
                                    ActivePage::Pharmacies => {
                                        view! { <PharmacyListPage /> }.into_any()
                                    }
                                    ActivePage::Bookings => {
                                        view! { <BookingListPage /> }.into_any()
                                    }
                                    ActivePage::Coupons => view! { <CouponListPage /> }.into_any(),
                                    ActivePage::Profile => {
                                        view! { <VendorProfilePage /> }.into_any()
                                    }
                                }}
                            </main>
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
