//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use jobtrack_common::db::applications::insert_application;
use jobtrack_common::db::jobs::insert_job;
use jobtrack_common::db::users::insert_user;
use jobtrack_common::db::{Application, Job, NewApplication, NewJob, NewUser, User};
use jobtrack_common::{connect_to_db, Database, DatabaseConfig, Host};

/// Minimal host application for tests
#[derive(Default)]
pub struct TestApp {
    pub db: Option<Database>,
}

impl Host for TestApp {
    fn database(&self) -> Option<&Database> {
        self.db.as_ref()
    }

    fn attach_database(&mut self, db: Database) {
        self.db = Some(db);
    }
}

/// Fresh in-memory database with statement logging off
pub async fn memory_db() -> Database {
    let mut app = TestApp::default();
    connect_to_db(&mut app, DatabaseConfig::in_memory().with_echo(false))
        .await
        .unwrap();
    app.db.unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// One job, one user and an application linking them
pub async fn seed_application(db: &Database) -> (Job, User, Application) {
    let job = insert_job(db, &NewJob::new("Backend Engineer")).await.unwrap();
    let user = insert_user(
        db,
        &NewUser {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            location: Some("London".to_string()),
        },
    )
    .await
    .unwrap();
    let application = insert_application(
        db,
        &NewApplication {
            date_applied: Some(at(2024, 3, 1, 9, 30)),
            job_id: job.job_id,
            user_id: user.user_id,
        },
    )
    .await
    .unwrap();

    (job, user, application)
}
