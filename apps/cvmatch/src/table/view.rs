//! Pure derivation of a table view from a collection and its controls.
//!
//! The pipeline is filter → search → stable sort → paginate. Each stage is
//! total: out-of-range pages clamp to an empty slice, never an error.

use std::cmp::Ordering;

use crate::table::controls::{ControlState, SortDirection};
use crate::table::schema::{FieldValue, Record};

/// The read-only projection of a collection through a `ControlState`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<R> {
    pub filtered: Vec<R>,
    pub sorted: Vec<R>,
    pub paginated: Vec<R>,
    pub total_items: usize,
    pub total_pages: usize,
}

pub(crate) fn derive_view<R>(collection: &[R], controls: &ControlState) -> DerivedView<R>
where
    R: Record + Clone,
{
    let filtered: Vec<R> = collection
        .iter()
        .filter(|r| passes_filters(*r, controls) && passes_search(*r, controls))
        .cloned()
        .collect();

    let mut sorted = filtered.clone();
    if let Some(field) = controls.sort.field.as_deref() {
        // `sort_by` is stable, so equal keys keep their filtered order.
        sorted.sort_by(|a, b| compare_records(a, b, field, controls.sort.direction));
    }

    let total_items = sorted.len();
    let total_pages = (total_items.div_ceil(controls.page_size)).max(1);

    let start = (controls.page - 1).saturating_mul(controls.page_size);
    let end = start.saturating_add(controls.page_size).min(total_items);
    let paginated = if start < total_items {
        sorted[start..end].to_vec()
    } else {
        Vec::new()
    };

    DerivedView {
        filtered,
        sorted,
        paginated,
        total_items,
        total_pages,
    }
}

/// A record passes when every active (non-empty) filter admits it. A record
/// without a value for a filtered field never passes that filter.
fn passes_filters<R: Record>(record: &R, controls: &ControlState) -> bool {
    controls
        .filters
        .iter()
        .filter(|(_, wanted)| !wanted.is_empty())
        .all(|(field, wanted)| {
            record
                .field(field)
                .map(|value| value.admits(wanted))
                .unwrap_or(false)
        })
}

/// Case-insensitive substring search across the record's text fields only.
fn passes_search<R: Record>(record: &R, controls: &ControlState) -> bool {
    if controls.search_term.is_empty() {
        return true;
    }
    let term = controls.search_term.to_lowercase();
    R::schema().fields().iter().any(|field| {
        matches!(
            record.field(field),
            Some(FieldValue::Text(text)) if text.to_lowercase().contains(&term)
        )
    })
}

/// Records missing the sort field order after records that have it,
/// regardless of direction; only present-present comparisons flip.
fn compare_records<R: Record>(a: &R, b: &R, field: &str, direction: SortDirection) -> Ordering {
    match (a.field(field), b.field(field)) {
        (Some(av), Some(bv)) => {
            let ordering = av.compare(&bv);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
