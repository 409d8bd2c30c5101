//! Pure filter/search and pagination over already-fetched lists.
//!
//! Every list page derives its visible rows through these functions:
//! raw list -> query + date filter -> page slice. All functions are pure,
//! so repeated calls with identical inputs are stable.

use chrono::NaiveDate;

/// Types whose rows can be matched against a free-text query.
pub trait Searchable {
    /// The field values the query is matched against.
    fn search_haystacks(&self) -> Vec<String>;
}

/// Case-insensitive substring match against any searchable field.
/// An empty (or whitespace-only) query matches everything.
pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_haystacks()
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// Inclusive calendar-day bound; a missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// A row with no parsable timestamp is kept only when no bound is set.
    pub fn contains(&self, day: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(day) = day else {
            return false;
        };
        if self.from.is_some_and(|from| day < from) {
            return false;
        }
        if self.to.is_some_and(|to| day > to) {
            return false;
        }
        true
    }
}

/// Derive the filtered view: query match AND date-range match.
pub fn filter_items<T, F>(items: &[T], query: &str, range: DateRange, day_of: F) -> Vec<T>
where
    T: Searchable + Clone,
    F: Fn(&T) -> Option<NaiveDate>,
{
    items
        .iter()
        .filter(|item| matches_query(*item, query) && range.contains(day_of(item)))
        .cloned()
        .collect()
}

/// ceil(len / page_size), minimum 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Clamp a 1-based page number into the valid range for `len` items.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size))
}

/// The slice `[(page-1)*size, page*size)` of the filtered view, 1-based.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return Vec::new();
    }
    let page = page.max(1);
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::parse_day;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        mobile: String,
        created_at: String,
    }

    impl Searchable for Row {
        fn search_haystacks(&self) -> Vec<String> {
            vec![self.name.clone(), self.mobile.clone()]
        }
    }

    fn row(name: &str, mobile: &str, created_at: &str) -> Row {
        Row {
            name: name.to_string(),
            mobile: mobile.to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn created_day(r: &Row) -> Option<NaiveDate> {
        parse_day(&r.created_at)
    }

    #[test]
    fn empty_filter_is_identity() {
        let rows = vec![
            row("Asha", "9876543210", "2025-09-10T08:00:00Z"),
            row("Ravi", "9000000001", "2025-09-11T08:00:00Z"),
        ];
        let out = filter_items(&rows, "", DateRange::default(), created_day);
        assert_eq!(out, rows);
    }

    #[test]
    fn query_matching_is_sound_and_complete() {
        let rows = vec![
            row("Asha Verma", "9876543210", ""),
            row("Ravi Kumar", "9876543211", ""),
            row("ASHA Nair", "9000000002", ""),
        ];
        let out = filter_items(&rows, "asha", DateRange::default(), created_day);
        // sound: every returned row matches
        assert!(out
            .iter()
            .all(|r| r.name.to_lowercase().contains("asha")));
        // complete: no matching row is excluded
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn exact_mobile_match_includes_and_near_miss_excludes() {
        let rows = vec![
            row("A", "9876543210", ""),
            row("B", "9876543211", ""),
        ];
        let out = filter_items(&rows, "9876543210", DateRange::default(), created_day);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].mobile, "9876543210");
    }

    #[test]
    fn date_bounds_are_inclusive_on_calendar_days() {
        let range = DateRange {
            from: parse_day("2025-09-01"),
            to: parse_day("2025-09-30"),
        };
        let rows = vec![
            row("out", "1", "2025-08-31T23:59:59Z"),
            row("in-start", "2", "2025-09-01T00:00:00Z"),
            row("in-end", "3", "2025-09-30T12:00:00Z"),
            row("no-date", "4", ""),
        ];
        let out = filter_items(&rows, "", range, created_day);
        let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["in-start", "in-end"]);
    }

    #[test]
    fn missing_bound_is_unbounded_on_that_side() {
        let from_only = DateRange {
            from: parse_day("2025-09-01"),
            to: None,
        };
        assert!(from_only.contains(parse_day("2099-01-01")));
        assert!(!from_only.contains(parse_day("2025-08-31")));

        let to_only = DateRange {
            from: None,
            to: parse_day("2025-09-30"),
        };
        assert!(to_only.contains(parse_day("1999-01-01")));
        assert!(!to_only.contains(parse_day("2025-10-01")));
    }

    #[test]
    fn twelve_items_page_size_ten_gives_two_pages() {
        let items: Vec<usize> = (0..12).collect();
        assert_eq!(total_pages(items.len(), 10), 2);
        assert_eq!(page_slice(&items, 1, 10).len(), 10);
        assert_eq!(page_slice(&items, 2, 10).len(), 2);
    }

    #[test]
    fn concatenated_pages_reconstruct_the_list() {
        let items: Vec<usize> = (0..57).collect();
        let size = 10;
        let pages = total_pages(items.len(), size);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = page_slice(&items, page, size);
            if page < pages {
                assert_eq!(slice.len(), size);
            }
            rebuilt.extend(slice);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        assert!(page_slice::<usize>(&[], 1, 10).is_empty());
    }

    #[test]
    fn page_navigation_clamps_at_boundaries() {
        assert_eq!(clamp_page(0, 12, 10), 1);
        assert_eq!(clamp_page(5, 12, 10), 2);
        assert_eq!(clamp_page(2, 12, 10), 2);
    }
}
