pub mod api;
pub mod ui;

use crate::shared::list_query::Searchable;
use contracts::domain::a005_category::Category;

impl Searchable for Category {
    fn search_haystacks(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}
