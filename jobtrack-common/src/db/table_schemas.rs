//! Table Schema Definitions
//!
//! Single source of truth for the five record tables. Each record type has
//! its own table.
//!
//! # Usage
//!
//! ```rust,ignore
//! create_all_tables(&pool).await?;
//! ```

use crate::db::schema::{create_table, ColumnDefinition, TableSchema};
use crate::Result;
use sqlx::SqlitePool;

/// Jobs table schema
pub struct JobsTableSchema;

impl TableSchema for JobsTableSchema {
    fn table_name() -> &'static str {
        "jobs"
    }

    fn expected_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("job_id", "INTEGER").primary_key(),
            ColumnDefinition::new("job_title", "TEXT").not_null(),
            ColumnDefinition::new("job_description", "TEXT"),
            ColumnDefinition::new("location", "TEXT"),
            ColumnDefinition::new("notes", "TEXT"),
            ColumnDefinition::new("link", "TEXT"),
        ]
    }
}

/// Companies table schema
///
/// Not referenced by any other table.
pub struct CompaniesTableSchema;

impl TableSchema for CompaniesTableSchema {
    fn table_name() -> &'static str {
        "companies"
    }

    fn expected_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("company_id", "INTEGER").primary_key(),
            ColumnDefinition::new("name", "TEXT"),
            ColumnDefinition::new("description", "TEXT"),
            ColumnDefinition::new("website", "TEXT"),
        ]
    }
}

/// Users table schema
pub struct UsersTableSchema;

impl TableSchema for UsersTableSchema {
    fn table_name() -> &'static str {
        "users"
    }

    fn expected_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("user_id", "INTEGER").primary_key(),
            ColumnDefinition::new("name", "TEXT"),
            ColumnDefinition::new("email", "TEXT"),
            ColumnDefinition::new("location", "TEXT"),
        ]
    }
}

/// Applications table schema
///
/// Join table between jobs and users. `(application_id, user_id)` is kept
/// unique so statuses can reference both columns together.
pub struct ApplicationsTableSchema;

impl TableSchema for ApplicationsTableSchema {
    fn table_name() -> &'static str {
        "applications"
    }

    fn expected_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("application_id", "INTEGER").primary_key(),
            ColumnDefinition::new("date_applied", "TIMESTAMP"),
            ColumnDefinition::new("job_id", "INTEGER")
                .not_null()
                .references("jobs", "job_id"),
            ColumnDefinition::new("user_id", "INTEGER")
                .not_null()
                .references("users", "user_id"),
        ]
    }

    fn table_constraints() -> Vec<String> {
        vec!["UNIQUE (application_id, user_id)".to_string()]
    }
}

/// Statuses table schema
///
/// A status must belong to the same user as its application.
pub struct StatusesTableSchema;

impl TableSchema for StatusesTableSchema {
    fn table_name() -> &'static str {
        "statuses"
    }

    fn expected_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("status_id", "INTEGER").primary_key(),
            ColumnDefinition::new("user_id", "INTEGER")
                .not_null()
                .references("users", "user_id"),
            ColumnDefinition::new("application_id", "INTEGER").not_null(),
            ColumnDefinition::new("date", "TIMESTAMP").not_null(),
            ColumnDefinition::new("notes", "TEXT"),
        ]
    }

    fn table_constraints() -> Vec<String> {
        vec![
            "FOREIGN KEY (application_id, user_id) REFERENCES applications (application_id, user_id)"
                .to_string(),
        ]
    }
}

/// Names of every record table, in creation order
pub const RECORD_TABLES: [&str; 5] = ["jobs", "companies", "users", "applications", "statuses"];

/// Create all record tables (parents before children)
pub async fn create_all_tables(pool: &SqlitePool) -> Result<()> {
    create_table::<JobsTableSchema>(pool).await?;
    create_table::<CompaniesTableSchema>(pool).await?;
    create_table::<UsersTableSchema>(pool).await?;
    create_table::<ApplicationsTableSchema>(pool).await?;
    create_table::<StatusesTableSchema>(pool).await?;
    Ok(())
}
