//! Job queries
//!
//! Jobs relate to users only through applications; `users_for_job` is the
//! Job -> User direction of that link.

use crate::db::models::{Application, Job, NewJob, User};
use crate::db::Database;
use crate::Result;

pub async fn insert_job(db: &Database, job: &NewJob) -> Result<Job> {
    let row = sqlx::query_as::<_, Job>(
        r#"
        INSERT INTO jobs (job_title, job_description, location, notes, link)
        VALUES (?, ?, ?, ?, ?)
        RETURNING job_id, job_title, job_description, location, notes, link
        "#,
    )
    .bind(&job.job_title)
    .bind(&job.job_description)
    .bind(&job.location)
    .bind(&job.notes)
    .bind(&job.link)
    .fetch_one(db.pool())
    .await?;

    db.track("jobs", row.job_id, "insert");
    Ok(row)
}

pub async fn get_job(db: &Database, job_id: i64) -> Result<Option<Job>> {
    let row = sqlx::query_as::<_, Job>(
        "SELECT job_id, job_title, job_description, location, notes, link FROM jobs WHERE job_id = ?",
    )
    .bind(job_id)
    .fetch_optional(db.pool())
    .await?;

    Ok(row)
}

pub async fn list_jobs(db: &Database) -> Result<Vec<Job>> {
    let rows = sqlx::query_as::<_, Job>(
        "SELECT job_id, job_title, job_description, location, notes, link FROM jobs ORDER BY job_id",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}

/// Delete a job. Fails with `Error::Integrity` while applications reference it.
pub async fn delete_job(db: &Database, job_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM jobs WHERE job_id = ?")
        .bind(job_id)
        .execute(db.pool())
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        db.track("jobs", job_id, "delete");
    }
    Ok(deleted)
}

/// Users who applied to this job, each listed once
pub async fn users_for_job(db: &Database, job_id: i64) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, User>(
        r#"
        SELECT DISTINCT u.user_id, u.name, u.email, u.location
        FROM users u
        JOIN applications a ON a.user_id = u.user_id
        WHERE a.job_id = ?
        ORDER BY u.user_id
        "#,
    )
    .bind(job_id)
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}

pub async fn applications_for_job(db: &Database, job_id: i64) -> Result<Vec<Application>> {
    let rows = sqlx::query_as::<_, Application>(
        r#"
        SELECT application_id, date_applied, job_id, user_id
        FROM applications WHERE job_id = ?
        ORDER BY application_id
        "#,
    )
    .bind(job_id)
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}
