pub mod api;
pub mod ui;

use crate::shared::list_query::Searchable;
use contracts::domain::a004_medicine::Medicine;

impl Searchable for Medicine {
    fn search_haystacks(&self) -> Vec<String> {
        vec![self.name.clone(), self.category.clone()]
    }
}
