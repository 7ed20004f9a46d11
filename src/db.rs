use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        emp_id      TEXT PRIMARY KEY NOT NULL,
        name        TEXT NOT NULL,
        email       TEXT NOT NULL UNIQUE,
        department  TEXT NOT NULL
    )
    "#,
    // no foreign key: attendance outlives a deleted employee
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id      TEXT PRIMARY KEY NOT NULL,
        emp_id  TEXT NOT NULL,
        date    TEXT NOT NULL,
        status  TEXT NOT NULL CHECK (status IN ('Present', 'Absent'))
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_attendance_emp_date
        ON attendance (emp_id, date)
    "#,
];

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    info!(database_url, "Database ready");

    Ok(pool)
}

/// Safe to run on every startup.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
