//! Company queries

use crate::db::models::{Company, NewCompany};
use crate::db::Database;
use crate::Result;

pub async fn insert_company(db: &Database, company: &NewCompany) -> Result<Company> {
    company.validate()?;

    let row = sqlx::query_as::<_, Company>(
        r#"
        INSERT INTO companies (name, description, website)
        VALUES (?, ?, ?)
        RETURNING company_id, name, description, website
        "#,
    )
    .bind(&company.name)
    .bind(&company.description)
    .bind(&company.website)
    .fetch_one(db.pool())
    .await?;

    db.track("companies", row.company_id, "insert");
    Ok(row)
}

pub async fn get_company(db: &Database, company_id: i64) -> Result<Option<Company>> {
    let row = sqlx::query_as::<_, Company>(
        "SELECT company_id, name, description, website FROM companies WHERE company_id = ?",
    )
    .bind(company_id)
    .fetch_optional(db.pool())
    .await?;

    Ok(row)
}

pub async fn list_companies(db: &Database) -> Result<Vec<Company>> {
    let rows = sqlx::query_as::<_, Company>(
        "SELECT company_id, name, description, website FROM companies ORDER BY company_id",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(rows)
}

pub async fn delete_company(db: &Database, company_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM companies WHERE company_id = ?")
        .bind(company_id)
        .execute(db.pool())
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        db.track("companies", company_id, "delete");
    }
    Ok(deleted)
}
