//! Persistence for employees and their attendance.
//!
//! `RecordStore` is the single owner of both tables. Every statement acquires
//! a pooled connection and gives it back on return, including the early
//! returns taken on validation and not-found failures. Pre-checks produce the
//! usual answer; when two writers race past them, the table's own
//! `PRIMARY KEY` / `UNIQUE` constraint picks the winner and the loser's
//! violation is reported as the matching duplicate error.

use sqlx::SqlitePool;

mod attendance;
mod employee;

#[derive(Clone, Debug)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Which unique constraint a failed insert tripped over, if any.
///
/// SQLite reports these as `UNIQUE constraint failed: <table>.<column>`.
pub(crate) fn unique_violation(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Some(db_err.message().to_string())
        }
        _ => None,
    }
}
