use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::table::schema::{FieldValue, Record, Schema};

/// A job posting as listed on the board and the employer screens.
/// `match_score` is fixture data supplied by the data source; this crate
/// never computes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub status: String,
    pub skills: Vec<String>,
    pub match_score: Option<u32>,
    pub posted_at: NaiveDate,
}

const JOB_FIELDS: Schema = Schema::new(&[
    "title",
    "company",
    "location",
    "employment_type",
    "status",
    "skills",
    "match_score",
    "posted_at",
]);

impl Record for JobPosting {
    fn key(&self) -> Uuid {
        self.id
    }

    fn schema() -> Schema {
        JOB_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::text(&self.title)),
            "company" => Some(FieldValue::text(&self.company)),
            "location" => Some(FieldValue::text(&self.location)),
            "employment_type" => Some(FieldValue::text(&self.employment_type)),
            "status" => Some(FieldValue::text(&self.status)),
            "skills" => Some(FieldValue::tags(self.skills.clone())),
            "match_score" => self.match_score.map(FieldValue::number),
            "posted_at" => Some(FieldValue::text(self.posted_at.to_string())),
            _ => None,
        }
    }
}
