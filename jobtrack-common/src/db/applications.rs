//! Application queries

use crate::db::models::{Application, NewApplication};
use crate::db::Database;
use crate::Result;

/// Insert an application. The referenced job and user must exist.
pub async fn insert_application(db: &Database, application: &NewApplication) -> Result<Application> {
    let row = sqlx::query_as::<_, Application>(
        r#"
        INSERT INTO applications (date_applied, job_id, user_id)
        VALUES (?, ?, ?)
        RETURNING application_id, date_applied, job_id, user_id
        "#,
    )
    .bind(application.date_applied)
    .bind(application.job_id)
    .bind(application.user_id)
    .fetch_one(db.pool())
    .await?;

    db.track("applications", row.application_id, "insert");
    Ok(row)
}

pub async fn get_application(db: &Database, application_id: i64) -> Result<Option<Application>> {
    let row = sqlx::query_as::<_, Application>(
        "SELECT application_id, date_applied, job_id, user_id FROM applications WHERE application_id = ?",
    )
    .bind(application_id)
    .fetch_optional(db.pool())
    .await?;

    Ok(row)
}

pub async fn list_applications(db: &Database) -> Result<Vec<Application>> {
    let rows = sqlx::query_as::<_, Application>(
        "SELECT application_id, date_applied, job_id, user_id FROM applications ORDER BY application_id",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}

/// Delete an application. Fails with `Error::Integrity` while statuses
/// reference it.
pub async fn delete_application(db: &Database, application_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM applications WHERE application_id = ?")
        .bind(application_id)
        .execute(db.pool())
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        db.track("applications", application_id, "delete");
    }
    Ok(deleted)
}
