pub mod api;
pub mod ui;

use crate::shared::list_query::Searchable;
use contracts::domain::a007_coupon::Coupon;

impl Searchable for Coupon {
    fn search_haystacks(&self) -> Vec<String> {
        vec![self.code.clone()]
    }
}
