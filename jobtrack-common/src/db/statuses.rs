//! Status queries

use crate::db::models::{NewStatus, Status};
use crate::db::Database;
use crate::Result;

/// Insert a status update. `user_id` must match the application's user.
pub async fn insert_status(db: &Database, status: &NewStatus) -> Result<Status> {
    let row = sqlx::query_as::<_, Status>(
        r#"
        INSERT INTO statuses (user_id, application_id, date, notes)
        VALUES (?, ?, ?, ?)
        RETURNING status_id, user_id, application_id, date, notes
        "#,
    )
    .bind(status.user_id)
    .bind(status.application_id)
    .bind(status.date)
    .bind(&status.notes)
    .fetch_one(db.pool())
    .await?;

    db.track("statuses", row.status_id, "insert");
    Ok(row)
}

pub async fn get_status(db: &Database, status_id: i64) -> Result<Option<Status>> {
    let row = sqlx::query_as::<_, Status>(
        "SELECT status_id, user_id, application_id, date, notes FROM statuses WHERE status_id = ?",
    )
    .bind(status_id)
    .fetch_optional(db.pool())
    .await?;

    Ok(row)
}

/// Status history of an application, oldest first
pub async fn statuses_for_application(db: &Database, application_id: i64) -> Result<Vec<Status>> {
    let rows = sqlx::query_as::<_, Status>(
        r#"
        SELECT status_id, user_id, application_id, date, notes
        FROM statuses WHERE application_id = ?
        ORDER BY julianday(date), status_id
        "#,
    )
    .bind(application_id)
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}

pub async fn delete_status(db: &Database, status_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM statuses WHERE status_id = ?")
        .bind(status_id)
        .execute(db.pool())
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        db.track("statuses", status_id, "delete");
    }
    Ok(deleted)
}
