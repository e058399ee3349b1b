//! Tests for connect_to_db and schema initialization
//!
//! Covers:
//! - Database creation on first run and reopening an existing file
//! - Binding the handle to a host, repeat connects and conflicts
//! - Statement logging and modification tracking flags

mod common;

use common::{memory_db, TestApp};
use jobtrack_common::db::jobs::{get_job, insert_job, list_jobs};
use jobtrack_common::db::table_schemas::RECORD_TABLES;
use jobtrack_common::db::NewJob;
use jobtrack_common::{connect_to_db, DatabaseConfig, Error, Host};
use tempfile::TempDir;

fn file_config(dir: &TempDir) -> DatabaseConfig {
    let path = dir.path().join("jobtrack.db");
    DatabaseConfig::default()
        .with_url(format!("sqlite://{}?mode=rwc", path.display()))
        .with_echo(false)
}

#[tokio::test]
async fn test_connect_attaches_database_to_host() {
    let mut app = TestApp::default();
    assert!(app.database().is_none());

    connect_to_db(&mut app, DatabaseConfig::in_memory()).await.unwrap();

    let db = app.database().expect("database should be attached");
    db.ping().await.unwrap();
    assert_eq!(db.config().database_url, "sqlite::memory:");
}

#[tokio::test]
async fn test_database_file_created_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("jobtrack.db");
    assert!(!db_path.exists());

    let mut app = TestApp::default();
    connect_to_db(&mut app, file_config(&dir)).await.unwrap();

    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_reopen_keeps_rows() {
    let dir = TempDir::new().unwrap();

    let mut first = TestApp::default();
    connect_to_db(&mut first, file_config(&dir)).await.unwrap();
    let db = first.db.take().unwrap();
    let job = insert_job(&db, &NewJob::new("Engineer")).await.unwrap();
    db.close().await;

    let mut second = TestApp::default();
    connect_to_db(&mut second, file_config(&dir)).await.unwrap();
    let db = second.db.unwrap();

    assert_eq!(get_job(&db, job.job_id).await.unwrap(), Some(job));
}

#[tokio::test]
async fn test_only_record_tables_created() {
    let db = memory_db().await;

    let mut tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type='table' AND name != 'sqlite_sequence'",
    )
    .fetch_all(db.pool())
    .await
    .unwrap();
    tables.sort();

    let mut expected: Vec<String> = RECORD_TABLES.iter().map(|t| t.to_string()).collect();
    expected.sort();
    assert_eq!(tables, expected);
}

#[tokio::test]
async fn test_connect_twice_with_same_config_is_noop() {
    let mut app = TestApp::default();
    let config = DatabaseConfig::in_memory().with_echo(false);

    connect_to_db(&mut app, config.clone()).await.unwrap();
    let job = insert_job(app.db.as_ref().unwrap(), &NewJob::new("Engineer"))
        .await
        .unwrap();

    connect_to_db(&mut app, config).await.unwrap();

    // Same handle kept: the row written through the first connect is visible
    let jobs = list_jobs(app.db.as_ref().unwrap()).await.unwrap();
    assert_eq!(jobs, vec![job]);
}

#[tokio::test]
async fn test_connect_with_different_config_conflicts() {
    let mut app = TestApp::default();
    connect_to_db(&mut app, DatabaseConfig::in_memory()).await.unwrap();

    let result = connect_to_db(&mut app, DatabaseConfig::in_memory().with_echo(false)).await;
    assert!(matches!(result, Err(Error::ConfigConflict(_))));

    // First binding untouched
    assert!(app.database().unwrap().config().echo);
}

#[tokio::test]
async fn test_non_sqlite_url_rejected() {
    let mut app = TestApp::default();
    let config = DatabaseConfig::default().with_url("postgresql:///jobs");

    let result = connect_to_db(&mut app, config).await;

    assert!(matches!(result, Err(Error::Config(_))));
    assert!(app.database().is_none());
}

#[tokio::test]
async fn test_echo_flag_does_not_change_results() {
    let mut results = Vec::new();

    for echo in [true, false] {
        let mut app = TestApp::default();
        connect_to_db(&mut app, DatabaseConfig::in_memory().with_echo(echo))
            .await
            .unwrap();
        let db = app.db.unwrap();

        insert_job(&db, &NewJob::new("Engineer")).await.unwrap();
        insert_job(&db, &NewJob::new("Designer")).await.unwrap();
        results.push(list_jobs(&db).await.unwrap());
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].len(), 2);
}

#[tokio::test]
async fn test_track_modifications_does_not_change_results() {
    let mut app = TestApp::default();
    let config = DatabaseConfig::in_memory()
        .with_echo(false)
        .with_track_modifications(true);
    connect_to_db(&mut app, config).await.unwrap();
    let db = app.db.unwrap();

    let job = insert_job(&db, &NewJob::new("Engineer")).await.unwrap();

    assert_eq!(get_job(&db, job.job_id).await.unwrap(), Some(job));
}
