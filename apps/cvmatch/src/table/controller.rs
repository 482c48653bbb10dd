//! The owner type behind every listing screen: holds the collection and the
//! `ControlState`, recomputes the derived view synchronously on each
//! mutation, and validates every field reference against the record schema.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::table::controls::ControlState;
use crate::table::presets::TablePreset;
use crate::table::schema::{FieldValue, Record};
use crate::table::view::{derive_view, DerivedView};

#[derive(Debug)]
pub struct TableController<R: Record> {
    collection: Vec<R>,
    initial_filters: BTreeMap<String, FieldValue>,
    controls: ControlState,
    // Recomputed eagerly after every mutation, so reads are free and each
    // mutation observes all earlier ones in call order.
    view: DerivedView<R>,
}

impl<R: Record + Clone> TableController<R> {
    /// Builds a controller over a caller-owned collection. Fails fast on
    /// malformed input: a nil or duplicate record key, or an initial filter
    /// naming a field outside the record schema.
    pub fn new(
        collection: Vec<R>,
        initial_filters: BTreeMap<String, FieldValue>,
        page_size: usize,
    ) -> Result<Self, CoreError> {
        for field in initial_filters.keys() {
            R::schema().ensure(field)?;
        }
        validate_keys(&collection)?;

        let controls = ControlState::new(initial_filters.clone(), page_size);
        let view = derive_view(&collection, &controls);
        debug!(
            records = collection.len(),
            page_size = controls.page_size,
            "table controller created"
        );
        Ok(TableController {
            collection,
            initial_filters,
            controls,
            view,
        })
    }

    pub fn with_preset(collection: Vec<R>, preset: TablePreset) -> Result<Self, CoreError> {
        Self::new(collection, preset.initial_filters, preset.page_size)
    }

    /// The current projection. Always consistent with every mutation issued
    /// so far.
    pub fn view(&self) -> &DerivedView<R> {
        &self.view
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn set_filter(&mut self, field: &str, value: FieldValue) -> Result<(), CoreError> {
        R::schema().ensure(field)?;
        self.controls.apply_filter(field, value);
        self.refresh();
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.controls.reset_filters(&self.initial_filters);
        self.refresh();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.controls.apply_search(term);
        self.refresh();
    }

    pub fn set_sort(&mut self, field: &str) -> Result<(), CoreError> {
        R::schema().ensure(field)?;
        self.controls.apply_sort(field);
        self.refresh();
        Ok(())
    }

    pub fn set_page(&mut self, page: usize) {
        self.controls.apply_page(page);
        self.refresh();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.controls.apply_page_size(page_size);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = derive_view(&self.collection, &self.controls);
    }
}

fn validate_keys<R: Record>(collection: &[R]) -> Result<(), CoreError> {
    let mut seen: HashSet<Uuid> = HashSet::with_capacity(collection.len());
    for record in collection {
        let key = record.key();
        if key.is_nil() {
            return Err(CoreError::MalformedRecord(
                "record has a nil key".to_string(),
            ));
        }
        if !seen.insert(key) {
            return Err(CoreError::DuplicateKey(key));
        }
    }
    Ok(())
}
