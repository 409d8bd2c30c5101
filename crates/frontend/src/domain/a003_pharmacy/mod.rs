pub mod api;
pub mod ui;

use crate::shared::list_query::Searchable;
use contracts::domain::a003_pharmacy::Pharmacy;

impl Searchable for Pharmacy {
    fn search_haystacks(&self) -> Vec<String> {
        vec![self.name.clone(), self.location.clone()]
    }
}
