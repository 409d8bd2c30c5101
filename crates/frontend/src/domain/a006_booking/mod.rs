pub mod api;
pub mod ui;

use crate::shared::list_query::Searchable;
use chrono::NaiveDate;
use contracts::domain::a006_booking::Booking;
use contracts::domain::common::parse_day;

impl Searchable for Booking {
    fn search_haystacks(&self) -> Vec<String> {
        vec![
            self.customer.name.clone(),
            self.customer.mobile.clone(),
            self.status.clone(),
        ]
    }
}

pub fn booking_day(booking: &Booking) -> Option<NaiveDate> {
    parse_day(&booking.date)
}
