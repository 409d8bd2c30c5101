//! Reactive wrapper around the pure list-query functions.
//!
//! Bundles the signals every list page needs (raw items, loading/error,
//! query, date bounds, page, page size) so the pages themselves only render
//! markup. Any change to the query, date bounds, or page size resets the
//! current page to 1 so an out-of-range empty page is never shown.

use crate::shared::api::ApiError;
use crate::shared::list_query::{
    clamp_page, filter_items, page_slice, total_pages, DateRange, Searchable,
};
use chrono::NaiveDate;
use contracts::domain::common::parse_day;
use leptos::prelude::*;

pub struct ListController<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub query: RwSignal<String>,
    /// yyyy-mm-dd strings straight from the date inputs; empty = unbounded.
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    /// 1-based.
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    day_of: Option<fn(&T) -> Option<NaiveDate>>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

pub const DEFAULT_PAGE_SIZE: usize = 10;

impl<T: Clone + Searchable + Send + Sync + 'static> ListController<T> {
    /// `day_of` selects the timestamp the date bounds apply to; lists
    /// without date filtering pass `None`.
    pub fn new(day_of: Option<fn(&T) -> Option<NaiveDate>>) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            query: RwSignal::new(String::new()),
            date_from: RwSignal::new(String::new()),
            date_to: RwSignal::new(String::new()),
            page: RwSignal::new(1),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
            day_of,
        }
    }

    pub fn begin_load(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    pub fn finish_load(&self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => {
                self.items.set(items);
                self.page.set(1);
            }
            // The component is gone; nothing to display.
            Err(ApiError::Cancelled) => {}
            Err(e) => {
                log::warn!("list load failed: {e}");
                self.error.set(Some(e.to_string()));
            }
        }
        self.loading.set(false);
    }

    pub fn set_query(&self, value: String) {
        self.query.set(value);
        self.page.set(1);
    }

    pub fn set_date_from(&self, value: String) {
        self.date_from.set(value);
        self.page.set(1);
    }

    pub fn set_date_to(&self, value: String) {
        self.date_to.set(value);
        self.page.set(1);
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size.max(1));
        self.page.set(1);
    }

    pub fn go_to_page(&self, page: usize) {
        let len = self.filtered().len();
        self.page.set(clamp_page(page, len, self.page_size.get()));
    }

    pub fn range(&self) -> DateRange {
        DateRange {
            from: parse_day(&self.date_from.get()),
            to: parse_day(&self.date_to.get()),
        }
    }

    /// The filtered view the table, the export, and the page count share.
    pub fn filtered(&self) -> Vec<T> {
        let items = self.items.get();
        let query = self.query.get();
        let range = self.range();
        let day_of = self.day_of;
        filter_items(&items, &query, range, |item| {
            day_of.and_then(|f| f(item))
        })
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size.get())
    }

    pub fn page_items(&self) -> Vec<T> {
        page_slice(&self.filtered(), self.page.get(), self.page_size.get())
    }

    /// Patch the raw list in place, dropping rows `keep` rejects.
    /// Used after a mutation so bucket membership is always re-derived.
    pub fn patch_items(&self, mut apply: impl FnMut(&mut T), keep: impl Fn(&T) -> bool) {
        self.items.update(|items| {
            for item in items.iter_mut() {
                apply(item);
            }
            items.retain(|item| keep(item));
        });
        self.go_to_page(self.page.get());
    }
}
