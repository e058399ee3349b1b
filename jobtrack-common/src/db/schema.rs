//! Declarative table definitions
//!
//! Each table describes its columns once, in code, and the CREATE TABLE
//! statement is generated from that description.
//!
//! # Usage
//!
//! ```rust,ignore
//! pub struct JobsTableSchema;
//!
//! impl TableSchema for JobsTableSchema {
//!     fn table_name() -> &'static str { "jobs" }
//!
//!     fn expected_columns() -> Vec<ColumnDefinition> {
//!         vec![
//!             ColumnDefinition::new("job_id", "INTEGER").primary_key(),
//!             ColumnDefinition::new("job_title", "TEXT").not_null(),
//!         ]
//!     }
//! }
//!
//! create_table::<JobsTableSchema>(&pool).await?;
//! ```

use crate::Result;
use sqlx::SqlitePool;

/// Target of a foreign key column
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

/// Column definition with SQL constraints
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,
    /// SQL type (e.g., "TEXT", "INTEGER", "TIMESTAMP")
    pub sql_type: String,
    /// NOT NULL constraint
    pub not_null: bool,
    /// PRIMARY KEY constraint (always AUTOINCREMENT for INTEGER keys)
    pub primary_key: bool,
    /// REFERENCES target
    pub references: Option<ForeignKeyRef>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            not_null: false,
            primary_key: false,
            references: None,
        }
    }

    /// Mark column as PRIMARY KEY
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark column as NOT NULL
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Declare a foreign key to `table(column)`
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.references = Some(ForeignKeyRef {
            table: table.into(),
            column: column.into(),
        });
        self
    }

    /// Column clause as used inside CREATE TABLE
    fn create_clause(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.sql_type);
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
            if self.sql_type.eq_ignore_ascii_case("INTEGER") {
                sql.push_str(" AUTOINCREMENT");
            }
        }
        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(fk) = &self.references {
            sql.push_str(&format!(" REFERENCES {} ({})", fk.table, fk.column));
        }
        sql
    }
}

/// Defines expected schema for a database table
pub trait TableSchema {
    /// Table name in database
    fn table_name() -> &'static str;

    /// Column definitions in creation order
    fn expected_columns() -> Vec<ColumnDefinition>;

    /// Table-level constraints appended to CREATE TABLE (composite keys etc.)
    fn table_constraints() -> Vec<String> {
        Vec::new()
    }

    /// CREATE TABLE IF NOT EXISTS statement built from the definition
    fn create_table_sql() -> String {
        let mut clauses: Vec<String> = Self::expected_columns()
            .iter()
            .map(ColumnDefinition::create_clause)
            .collect();
        clauses.extend(Self::table_constraints());

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            Self::table_name(),
            clauses.join(",\n    ")
        )
    }
}

/// Create the table if it does not exist yet
pub async fn create_table<T: TableSchema>(pool: &SqlitePool) -> Result<()> {
    sqlx::query(&T::create_table_sql()).execute(pool).await?;
    Ok(())
}
