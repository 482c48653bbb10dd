//! User-adjustable table parameters and their invariant-preserving
//! transitions. Schema validation happens one layer up in the controller;
//! this module only owns the state rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::table::schema::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    /// `None` preserves input order.
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            field: None,
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub search_term: String,
    pub filters: BTreeMap<String, FieldValue>,
    pub sort: SortState,
    /// 1-based. May point past the collection; the derived view clamps.
    pub page: usize,
    pub page_size: usize,
}

impl ControlState {
    pub fn new(initial_filters: BTreeMap<String, FieldValue>, page_size: usize) -> Self {
        ControlState {
            search_term: String::new(),
            filters: initial_filters,
            sort: SortState::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Sets one filter value. Narrowing or widening the filter set always
    /// snaps back to the first page.
    pub(crate) fn apply_filter(&mut self, field: &str, value: FieldValue) {
        self.filters.insert(field.to_string(), value);
        self.page = 1;
    }

    /// Restores the supplied initial filters and clears the search term.
    /// Sort is deliberately untouched.
    pub(crate) fn reset_filters(&mut self, initial_filters: &BTreeMap<String, FieldValue>) {
        self.filters = initial_filters.clone();
        self.search_term.clear();
        self.page = 1;
    }

    /// Search participates in filtering, so it resets the page the same way
    /// filters do.
    pub(crate) fn apply_search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.page = 1;
    }

    /// Re-selecting the current sort field flips direction; a new field
    /// starts ascending.
    pub(crate) fn apply_sort(&mut self, field: &str) {
        match self.sort.field.as_deref() {
            Some(current) if current == field => {
                self.sort.direction = self.sort.direction.toggled();
            }
            _ => {
                self.sort = SortState {
                    field: Some(field.to_string()),
                    direction: SortDirection::Asc,
                };
            }
        }
    }

    pub(crate) fn apply_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub(crate) fn apply_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ControlState {
        ControlState::new(BTreeMap::new(), 10)
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut s = state();
        s.apply_page(4);
        s.apply_filter("status", FieldValue::text("active"));
        assert_eq!(s.page, 1);
        assert_eq!(s.filters.get("status"), Some(&FieldValue::text("active")));
    }

    #[test]
    fn test_search_resets_page() {
        let mut s = state();
        s.apply_page(3);
        s.apply_search("rust");
        assert_eq!(s.page, 1);
        assert_eq!(s.search_term, "rust");
    }

    #[test]
    fn test_reset_filters_restores_initial_and_clears_search() {
        let mut initial = BTreeMap::new();
        initial.insert("status".to_string(), FieldValue::text("active"));
        let mut s = ControlState::new(initial.clone(), 10);
        s.apply_filter("status", FieldValue::text("closed"));
        s.apply_filter("location", FieldValue::text("Remote"));
        s.apply_search("backend");
        s.apply_page(2);

        s.reset_filters(&initial);
        assert_eq!(s.filters, initial);
        assert!(s.search_term.is_empty());
        assert_eq!(s.page, 1);
    }

    #[test]
    fn test_sort_same_field_toggles_direction() {
        let mut s = state();
        s.apply_sort("name");
        assert_eq!(s.sort.field.as_deref(), Some("name"));
        assert_eq!(s.sort.direction, SortDirection::Asc);
        s.apply_sort("name");
        assert_eq!(s.sort.direction, SortDirection::Desc);
        s.apply_sort("name");
        assert_eq!(s.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_new_field_starts_ascending() {
        let mut s = state();
        s.apply_sort("name");
        s.apply_sort("name"); // now Desc
        s.apply_sort("status");
        assert_eq!(s.sort.field.as_deref(), Some("status"));
        assert_eq!(s.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_page_and_page_size_clamp_to_one() {
        let mut s = state();
        s.apply_page(0);
        assert_eq!(s.page, 1);
        s.apply_page_size(0);
        assert_eq!(s.page_size, 1);
        assert_eq!(ControlState::new(BTreeMap::new(), 0).page_size, 1);
    }

    #[test]
    fn test_sort_survives_filter_reset() {
        let mut s = state();
        s.apply_sort("title");
        s.reset_filters(&BTreeMap::new());
        assert_eq!(s.sort.field.as_deref(), Some("title"));
    }
}
