use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::table::schema::{FieldValue, Record, Schema};

/// A candidate CV profile as listed on the employer candidate screens.
/// `match_score` is fixture data relative to the employer's active posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvProfile {
    pub id: Uuid,
    pub candidate_name: String,
    pub headline: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub status: String,
    pub match_score: Option<u32>,
    pub updated_at: DateTime<Utc>,
}

const CV_FIELDS: Schema = Schema::new(&[
    "candidate_name",
    "headline",
    "skills",
    "experience_years",
    "status",
    "match_score",
    "updated_at",
]);

impl Record for CvProfile {
    fn key(&self) -> Uuid {
        self.id
    }

    fn schema() -> Schema {
        CV_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "candidate_name" => Some(FieldValue::text(&self.candidate_name)),
            "headline" => Some(FieldValue::text(&self.headline)),
            "skills" => Some(FieldValue::tags(self.skills.clone())),
            "experience_years" => Some(FieldValue::number(self.experience_years)),
            "status" => Some(FieldValue::text(&self.status)),
            "match_score" => self.match_score.map(FieldValue::number),
            "updated_at" => Some(FieldValue::text(self.updated_at.to_rfc3339())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_years_exposed_as_number() {
        let cv = CvProfile {
            id: Uuid::new_v4(),
            candidate_name: "Grace".to_string(),
            headline: "Systems engineer".to_string(),
            skills: vec!["c".to_string()],
            experience_years: 11,
            status: "published".to_string(),
            match_score: None,
            updated_at: Utc::now(),
        };
        assert_eq!(cv.field("experience_years"), Some(FieldValue::number(11u32)));
    }
}
