//! Shared fixtures for unit tests.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tempfile::TempDir;

use crate::db::{create_schema, init_db};
use crate::model::attendance::NewAttendance;
use crate::model::employee::NewEmployee;
use crate::store::RecordStore;

/// Every connection to `sqlite::memory:` is its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").expect("memory url");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("open in-memory sqlite");
    create_schema(&pool).await.expect("create schema");
    pool
}

pub async fn memory_store() -> RecordStore {
    RecordStore::new(memory_pool().await)
}

/// A store over a SQLite file with several pooled connections, so concurrent
/// writers really hold separate connections. Keep the `TempDir` alive.
pub async fn file_store() -> (TempDir, RecordStore) {
    let dir = TempDir::new().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("hrms.db").display());
    let pool = init_db(&url, 8).await.expect("open file-backed sqlite");
    (dir, RecordStore::new(pool))
}

pub fn employee(id: &str, email: &str) -> NewEmployee {
    NewEmployee {
        employee_id: id.to_string(),
        name: format!("Employee {id}"),
        email: email.to_string(),
        department: "Engineering".to_string(),
    }
}

pub fn attendance(id: &str, date: &str, status: &str) -> NewAttendance {
    NewAttendance {
        employee_id: id.to_string(),
        date: date.parse().expect("valid date"),
        status: status.to_string(),
    }
}
