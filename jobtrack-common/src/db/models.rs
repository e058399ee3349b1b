//! Database models
//!
//! One struct per table plus the insert payloads the query modules accept.
//! `Display` renders every declared column in declaration order, printing
//! absent values as `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use crate::{Error, Result};

/// Max length of `companies.name` and `users.location`
pub const SHORT_TEXT_MAX: usize = 64;

/// Max length of `users.name` and `users.email`
pub const MEDIUM_TEXT_MAX: usize = 128;

/// Renders an optional column the way the record reprs expect
struct Field<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "None"),
        }
    }
}

fn check_len(field: &str, value: &Option<String>, max: usize) -> Result<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(Error::InvalidInput(format!(
            "{} exceeds {} characters",
            field, max
        ))),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub job_id: i64,
    pub job_title: String,
    pub job_description: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub link: Option<String>,
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Job job_id={} job_title={} job_description={} location={} notes={} link={}>",
            self.job_id,
            self.job_title,
            Field(&self.job_description),
            Field(&self.location),
            Field(&self.notes),
            Field(&self.link)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub job_title: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl NewJob {
    pub fn new(job_title: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub company_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Company company_id={} name={} description={} website={}>",
            self.company_id,
            Field(&self.name),
            Field(&self.description),
            Field(&self.website)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl NewCompany {
    pub fn validate(&self) -> Result<()> {
        check_len("company name", &self.name, SHORT_TEXT_MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<User user_id={} name={} email={} location={}>",
            self.user_id,
            Field(&self.name),
            Field(&self.email),
            Field(&self.location)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        check_len("user name", &self.name, MEDIUM_TEXT_MAX)?;
        check_len("user email", &self.email, MEDIUM_TEXT_MAX)?;
        check_len("user location", &self.location, SHORT_TEXT_MAX)
    }
}

/// One user's application to one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub application_id: i64,
    pub date_applied: Option<DateTime<Utc>>,
    pub job_id: i64,
    pub user_id: i64,
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Application application_id={} date_applied={} job_id={} user_id={}>",
            self.application_id,
            Field(&self.date_applied),
            self.job_id,
            self.user_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewApplication {
    #[serde(default)]
    pub date_applied: Option<DateTime<Utc>>,
    pub job_id: i64,
    pub user_id: i64,
}

/// Timestamped status update on an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Status {
    pub status_id: i64,
    pub user_id: i64,
    pub application_id: i64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Status status_id={} user_id={} application_id={} date={} notes={}>",
            self.status_id,
            self.user_id,
            self.application_id,
            self.date,
            Field(&self.notes)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStatus {
    pub user_id: i64,
    pub application_id: i64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}
