//! Deterministic fixture collections standing in for a real backend.
//! Keys, timestamps, and match scores are fixed so tests and demo screens
//! see the same data on every run.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::uuid;

use crate::data::DataSource;
use crate::errors::CoreError;
use crate::models::{CvProfile, JobPosting, Role, UserAccount};

pub struct FixtureSource {
    jobs: Vec<JobPosting>,
    cvs: Vec<CvProfile>,
    users: Vec<UserAccount>,
}

impl FixtureSource {
    pub fn seeded() -> Self {
        FixtureSource {
            jobs: seed_jobs(),
            cvs: seed_cvs(),
            users: seed_users(),
        }
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn jobs(&self) -> Result<Vec<JobPosting>, CoreError> {
        Ok(self.jobs.clone())
    }

    async fn cvs(&self) -> Result<Vec<CvProfile>, CoreError> {
        Ok(self.cvs.clone())
    }

    async fn users(&self) -> Result<Vec<UserAccount>, CoreError> {
        Ok(self.users.clone())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn timestamp(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(9, 0, 0)
        .expect("valid fixture time")
        .and_utc()
}

fn seed_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: uuid!("6f2f6f60-0001-4a0a-9c70-000000000001"),
            title: "Senior Backend Engineer".to_string(),
            company: "Initech".to_string(),
            location: "Remote".to_string(),
            employment_type: "full_time".to_string(),
            status: "active".to_string(),
            skills: vec!["rust".to_string(), "postgres".to_string()],
            match_score: Some(86),
            posted_at: date(2025, 5, 12),
        },
        JobPosting {
            id: uuid!("6f2f6f60-0001-4a0a-9c70-000000000002"),
            title: "Frontend Engineer".to_string(),
            company: "Hooli".to_string(),
            location: "Berlin".to_string(),
            employment_type: "full_time".to_string(),
            status: "active".to_string(),
            skills: vec!["typescript".to_string(), "react".to_string()],
            match_score: Some(64),
            posted_at: date(2025, 6, 3),
        },
        JobPosting {
            id: uuid!("6f2f6f60-0001-4a0a-9c70-000000000003"),
            title: "Data Analyst".to_string(),
            company: "Initech".to_string(),
            location: "London".to_string(),
            employment_type: "part_time".to_string(),
            status: "closed".to_string(),
            skills: vec!["sql".to_string(), "python".to_string()],
            match_score: None,
            posted_at: date(2025, 2, 20),
        },
        JobPosting {
            id: uuid!("6f2f6f60-0001-4a0a-9c70-000000000004"),
            title: "Platform Engineer".to_string(),
            company: "Vandelay".to_string(),
            location: "Remote".to_string(),
            employment_type: "contract".to_string(),
            status: "active".to_string(),
            skills: vec!["rust".to_string(), "kubernetes".to_string()],
            match_score: Some(71),
            posted_at: date(2025, 7, 1),
        },
    ]
}

fn seed_cvs() -> Vec<CvProfile> {
    vec![
        CvProfile {
            id: uuid!("6f2f6f60-0002-4a0a-9c70-000000000001"),
            candidate_name: "Ada Lovelace".to_string(),
            headline: "Backend engineer, 8y distributed systems".to_string(),
            skills: vec!["rust".to_string(), "postgres".to_string(), "kafka".to_string()],
            experience_years: 8,
            status: "published".to_string(),
            match_score: Some(91),
            updated_at: timestamp(2025, 6, 28),
        },
        CvProfile {
            id: uuid!("6f2f6f60-0002-4a0a-9c70-000000000002"),
            candidate_name: "Grace Hopper".to_string(),
            headline: "Compiler engineer turned platform lead".to_string(),
            skills: vec!["c".to_string(), "rust".to_string()],
            experience_years: 12,
            status: "published".to_string(),
            match_score: Some(77),
            updated_at: timestamp(2025, 5, 9),
        },
        CvProfile {
            id: uuid!("6f2f6f60-0002-4a0a-9c70-000000000003"),
            candidate_name: "Evelyn Wang".to_string(),
            headline: "Junior frontend developer".to_string(),
            skills: vec!["typescript".to_string(), "react".to_string()],
            experience_years: 2,
            status: "draft".to_string(),
            match_score: None,
            updated_at: timestamp(2025, 7, 15),
        },
    ]
}

fn seed_users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: uuid!("6f2f6f60-0003-4a0a-9c70-000000000001"),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Candidate,
            status: "active".to_string(),
            created_at: timestamp(2024, 11, 2),
        },
        UserAccount {
            id: uuid!("6f2f6f60-0003-4a0a-9c70-000000000002"),
            name: "Bert Reed".to_string(),
            email: "bert@initech.example".to_string(),
            role: Role::Employer,
            status: "active".to_string(),
            created_at: timestamp(2024, 9, 18),
        },
        UserAccount {
            id: uuid!("6f2f6f60-0003-4a0a-9c70-000000000003"),
            name: "Cleo Marsh".to_string(),
            email: "cleo@cvmatcher.example".to_string(),
            role: Role::Admin,
            status: "active".to_string(),
            created_at: timestamp(2024, 8, 1),
        },
        UserAccount {
            id: uuid!("6f2f6f60-0003-4a0a-9c70-000000000004"),
            name: "Dev Patel".to_string(),
            email: "dev@example.com".to_string(),
            role: Role::Candidate,
            status: "suspended".to_string(),
            created_at: timestamp(2025, 1, 27),
        },
    ]
}
