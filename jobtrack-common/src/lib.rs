//! # Jobtrack Common Library
//!
//! Schema and persistence layer for the job application tracker:
//! - Record types (jobs, companies, users, applications, statuses)
//! - Table definitions and schema creation
//! - The `Database` handle and `connect_to_db`
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;

pub use db::{connect_to_db, Database, DatabaseConfig, Host};
pub use error::{Error, Result};
