//! HTTP API handlers for jobtrack-server

pub mod applications;
pub mod companies;
pub mod error;
pub mod health;
pub mod jobs;
pub mod users;

pub use error::ApiError;
pub use health::health_routes;
