use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::table::schema::{FieldValue, Record, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Candidate,
    Employer,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Employer => "employer",
            Role::Admin => "admin",
        }
    }

    /// Fixed per-role landing page used by wrong-role redirects.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Candidate => "/candidate/dashboard",
            Role::Employer => "/employer/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

const USER_FIELDS: Schema = Schema::new(&["name", "email", "role", "status", "created_at"]);

impl Record for UserAccount {
    fn key(&self) -> Uuid {
        self.id
    }

    fn schema() -> Schema {
        USER_FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::text(&self.name)),
            "email" => Some(FieldValue::text(&self.email)),
            "role" => Some(FieldValue::text(self.role.as_str())),
            "status" => Some(FieldValue::text(&self.status)),
            "created_at" => Some(FieldValue::text(self.created_at.to_rfc3339())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_dashboard_paths() {
        assert_eq!(Role::Candidate.dashboard_path(), "/candidate/dashboard");
        assert_eq!(Role::Employer.dashboard_path(), "/employer/dashboard");
        assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::Employer).unwrap();
        assert_eq!(json, "\"employer\"");
    }

    #[test]
    fn test_user_field_access() {
        let user = UserAccount {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Admin,
            status: "active".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(user.field("role"), Some(FieldValue::text("admin")));
        assert_eq!(user.field("salary"), None);
        assert!(UserAccount::schema().contains("email"));
    }
}
