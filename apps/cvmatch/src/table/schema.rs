//! Typed field access for table-controlled records.
//!
//! Every record type declares a closed `Schema` of field names; controls
//! referencing a field outside it get a typed `UnknownField` error instead
//! of silently matching nothing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// A single field value as exposed to table controls.
/// Date-like values travel as RFC 3339 text so they order correctly under
/// plain string comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Tags(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn number(value: impl Into<f64>) -> Self {
        FieldValue::Number(value.into())
    }

    pub fn tags<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Tags(values.into_iter().map(Into::into).collect())
    }

    /// An empty value deactivates the filter that carries it.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(_) => false,
            FieldValue::Tags(tags) => tags.is_empty(),
        }
    }

    /// Filter admission: a tag list admits any value it contains; every
    /// other shape requires exact equality, no normalization.
    pub(crate) fn admits(&self, wanted: &FieldValue) -> bool {
        match (self, wanted) {
            (FieldValue::Tags(tags), FieldValue::Text(w)) => tags.iter().any(|t| t == w),
            (field, wanted) => field == wanted,
        }
    }

    /// Sort comparison. Text orders case-insensitively with a full-string
    /// tiebreak; numbers order by total order; tag lists order
    /// lexicographically. Mixed shapes order by shape.
    pub(crate) fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Tags(a), FieldValue::Tags(b)) => a.cmp(b),
            (a, b) => a.shape_rank().cmp(&b.shape_rank()),
        }
    }

    fn shape_rank(&self) -> u8 {
        match self {
            FieldValue::Text(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Tags(_) => 2,
        }
    }
}

/// Closed set of field names a record type exposes to table controls.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [&'static str],
}

impl Schema {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Schema { fields }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| *f == field)
    }

    pub fn ensure(&self, field: &str) -> Result<(), CoreError> {
        if self.contains(field) {
            Ok(())
        } else {
            Err(CoreError::UnknownField {
                field: field.to_string(),
            })
        }
    }
}

/// A row in a table-controlled collection.
///
/// Implementors own their storage; the controller only ever derives views.
pub trait Record {
    /// Stable unique key.
    fn key(&self) -> Uuid;

    /// The closed field set this type exposes.
    fn schema() -> Schema
    where
        Self: Sized;

    /// Typed access to a declared field. `None` means the field is unset
    /// for this record (e.g. an absent match score), not that the field is
    /// unknown.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_admit_membership() {
        let field = FieldValue::tags(["rust", "sql"]);
        assert!(field.admits(&FieldValue::text("rust")));
        assert!(!field.admits(&FieldValue::text("go")));
    }

    #[test]
    fn test_scalar_admission_is_exact() {
        assert!(FieldValue::text("active").admits(&FieldValue::text("active")));
        // No normalization: case matters.
        assert!(!FieldValue::text("Active").admits(&FieldValue::text("active")));
        assert!(FieldValue::number(3).admits(&FieldValue::number(3)));
    }

    #[test]
    fn test_text_compare_is_case_insensitive() {
        let a = FieldValue::text("alice");
        let b = FieldValue::text("Bob");
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn test_text_compare_tiebreaks_on_exact_string() {
        let a = FieldValue::text("Alice");
        let b = FieldValue::text("alice");
        assert_ne!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_number_compare() {
        assert_eq!(
            FieldValue::number(2).compare(&FieldValue::number(10)),
            Ordering::Less
        );
    }

    #[test]
    fn test_empty_values() {
        assert!(FieldValue::text("").is_empty());
        assert!(FieldValue::tags(Vec::<String>::new()).is_empty());
        assert!(!FieldValue::number(0).is_empty());
    }

    #[test]
    fn test_schema_ensure_rejects_unknown_field() {
        let schema = Schema::new(&["title", "status"]);
        assert!(schema.ensure("title").is_ok());
        let err = schema.ensure("salary").unwrap_err();
        assert!(matches!(err, CoreError::UnknownField { field } if field == "salary"));
    }
}
