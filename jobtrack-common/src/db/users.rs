//! User queries

use crate::db::models::{Application, Job, NewUser, User};
use crate::db::Database;
use crate::Result;

pub async fn insert_user(db: &Database, user: &NewUser) -> Result<User> {
    user.validate()?;

    let row = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, location)
        VALUES (?, ?, ?)
        RETURNING user_id, name, email, location
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.location)
    .fetch_one(db.pool())
    .await?;

    db.track("users", row.user_id, "insert");
    Ok(row)
}

pub async fn get_user(db: &Database, user_id: i64) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, User>(
        "SELECT user_id, name, email, location FROM users WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(db.pool())
    .await?;

    Ok(row)
}

pub async fn list_users(db: &Database) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, User>(
        "SELECT user_id, name, email, location FROM users ORDER BY user_id",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}

/// Delete a user. Fails with `Error::Integrity` while applications or
/// statuses reference it.
pub async fn delete_user(db: &Database, user_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE user_id = ?")
        .bind(user_id)
        .execute(db.pool())
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        db.track("users", user_id, "delete");
    }
    Ok(deleted)
}

/// Jobs this user applied to, each listed once
pub async fn jobs_for_user(db: &Database, user_id: i64) -> Result<Vec<Job>> {
    let rows = sqlx::query_as::<_, Job>(
        r#"
        SELECT DISTINCT j.job_id, j.job_title, j.job_description, j.location, j.notes, j.link
        FROM jobs j
        JOIN applications a ON a.job_id = j.job_id
        WHERE a.user_id = ?
        ORDER BY j.job_id
        "#,
    )
    .bind(user_id)
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}

pub async fn applications_for_user(db: &Database, user_id: i64) -> Result<Vec<Application>> {
    let rows = sqlx::query_as::<_, Application>(
        r#"
        SELECT application_id, date_applied, job_id, user_id
        FROM applications WHERE user_id = ?
        ORDER BY application_id
        "#,
    )
    .bind(user_id)
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}
