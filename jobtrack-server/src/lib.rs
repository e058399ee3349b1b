//! jobtrack-server library - host application for the job tracker
//!
//! `JobtrackApp` is the host context `connect_to_db` installs the database
//! into. Once connected it builds the HTTP router.

use axum::Router;
use jobtrack_common::{Database, Error, Host, Result};
use tower_http::trace::TraceLayer;

pub mod api;

/// Host application context
#[derive(Debug, Default)]
pub struct JobtrackApp {
    db: Option<Database>,
}

impl JobtrackApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the router; requires a prior `connect_to_db`
    pub fn router(&self) -> Result<Router> {
        let db = self
            .db
            .clone()
            .ok_or_else(|| Error::Config("database not connected; call connect_to_db first".to_string()))?;
        Ok(build_router(AppState::new(db)))
    }
}

impl Host for JobtrackApp {
    fn database(&self) -> Option<&Database> {
        self.db.as_ref()
    }

    fn attach_database(&mut self, db: Database) {
        self.db = Some(db);
    }
}

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let records = Router::new()
        .route("/api/jobs", get(api::jobs::list).post(api::jobs::create))
        .route("/api/jobs/:id", get(api::jobs::get))
        .route("/api/jobs/:id/users", get(api::jobs::users))
        .route(
            "/api/companies",
            get(api::companies::list).post(api::companies::create),
        )
        .route("/api/users", get(api::users::list).post(api::users::create))
        .route("/api/users/:id/jobs", get(api::users::jobs))
        .route(
            "/api/applications",
            get(api::applications::list).post(api::applications::create),
        )
        .route(
            "/api/applications/:id/statuses",
            get(api::applications::statuses),
        )
        .route("/api/statuses", post(api::applications::create_status));

    Router::new()
        .merge(records)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
