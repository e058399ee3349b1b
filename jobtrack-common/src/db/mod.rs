//! Database models and queries

pub mod applications;
pub mod companies;
pub mod init;
pub mod jobs;
pub mod models;
pub mod schema;
pub mod statuses;
pub mod table_schemas;
pub mod users;

pub use init::*;
pub use models::*;
