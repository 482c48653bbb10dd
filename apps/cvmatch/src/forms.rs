//! Field-level validation for the editor forms. Pure, no I/O: callers get
//! a report of per-field issues and decide what to do with it.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    fn from_issues(issues: Vec<FieldIssue>) -> Self {
        ValidationReport {
            passed: issues.is_empty(),
            issues,
        }
    }

    /// For callers that block on validation rather than render the issues.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.passed {
            Ok(())
        } else {
            let reasons: Vec<String> = self
                .issues
                .iter()
                .map(|i| format!("{}: {}", i.field, i.reason))
                .collect();
            Err(CoreError::Validation(reasons.join("; ")))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPostingForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvProfileForm {
    pub candidate_name: String,
    pub headline: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

const EMPLOYMENT_TYPES: &[&str] = &["full_time", "part_time", "contract", "internship"];

const TITLE_MAX: usize = 120;
const HEADLINE_MAX: usize = 160;
const DESCRIPTION_MAX: usize = 5_000;
const EXPERIENCE_YEARS_MAX: u32 = 60;

pub fn validate_job_form(form: &JobPostingForm) -> ValidationReport {
    let mut issues = Vec::new();

    require_non_blank(&mut issues, "title", &form.title);
    require_max_len(&mut issues, "title", &form.title, TITLE_MAX);
    require_non_blank(&mut issues, "company", &form.company);
    require_non_blank(&mut issues, "location", &form.location);
    require_max_len(&mut issues, "description", &form.description, DESCRIPTION_MAX);

    if !EMPLOYMENT_TYPES.contains(&form.employment_type.as_str()) {
        issues.push(FieldIssue {
            field: "employment_type".to_string(),
            reason: format!(
                "Must be one of: {}",
                EMPLOYMENT_TYPES.join(", ")
            ),
        });
    }

    if form.skills.is_empty() {
        issues.push(FieldIssue {
            field: "skills".to_string(),
            reason: "Add at least one skill".to_string(),
        });
    } else if form.skills.iter().any(|s| s.trim().is_empty()) {
        issues.push(FieldIssue {
            field: "skills".to_string(),
            reason: "Skills must not be blank".to_string(),
        });
    }

    ValidationReport::from_issues(issues)
}

pub fn validate_cv_form(form: &CvProfileForm) -> ValidationReport {
    let mut issues = Vec::new();

    require_non_blank(&mut issues, "candidate_name", &form.candidate_name);
    require_non_blank(&mut issues, "headline", &form.headline);
    require_max_len(&mut issues, "headline", &form.headline, HEADLINE_MAX);

    if form.skills.is_empty() {
        issues.push(FieldIssue {
            field: "skills".to_string(),
            reason: "Add at least one skill".to_string(),
        });
    }

    if form.experience_years > EXPERIENCE_YEARS_MAX {
        issues.push(FieldIssue {
            field: "experience_years".to_string(),
            reason: format!("Must be at most {EXPERIENCE_YEARS_MAX}"),
        });
    }

    ValidationReport::from_issues(issues)
}

pub fn validate_user_form(form: &UserForm) -> ValidationReport {
    let mut issues = Vec::new();

    require_non_blank(&mut issues, "name", &form.name);

    if !looks_like_email(&form.email) {
        issues.push(FieldIssue {
            field: "email".to_string(),
            reason: "Enter a valid email address".to_string(),
        });
    }

    ValidationReport::from_issues(issues)
}

fn require_non_blank(issues: &mut Vec<FieldIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(FieldIssue {
            field: field.to_string(),
            reason: "Required".to_string(),
        });
    }
}

fn require_max_len(issues: &mut Vec<FieldIssue>, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        issues.push(FieldIssue {
            field: field.to_string(),
            reason: format!("Must be at most {max} characters"),
        });
    }
}

/// Shape check only; real address verification is the identity
/// collaborator's job.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.contains(char::is_whitespace)
}
