//! Per-screen table defaults. Pages used to re-implement these inline with
//! slightly different values each time; keeping them here makes every
//! listing screen open on one declared state.

use std::collections::BTreeMap;

use crate::table::schema::FieldValue;

#[derive(Debug, Clone)]
pub struct TablePreset {
    pub initial_filters: BTreeMap<String, FieldValue>,
    pub page_size: usize,
}

impl TablePreset {
    fn new(page_size: usize) -> Self {
        TablePreset {
            initial_filters: BTreeMap::new(),
            page_size,
        }
    }

    fn with_filter(mut self, field: &str, value: FieldValue) -> Self {
        self.initial_filters.insert(field.to_string(), value);
        self
    }
}

/// Candidate job board: active postings only.
pub fn candidate_job_board() -> TablePreset {
    TablePreset::new(10).with_filter("status", FieldValue::text("active"))
}

/// Employer's own postings list: active postings first load.
pub fn employer_job_list() -> TablePreset {
    TablePreset::new(10).with_filter("status", FieldValue::text("active"))
}

/// Employer candidate browser: published CVs only.
pub fn employer_candidate_list() -> TablePreset {
    TablePreset::new(10).with_filter("status", FieldValue::text("published"))
}

/// Admin user management: everything, larger pages.
pub fn admin_user_list() -> TablePreset {
    TablePreset::new(20)
}
