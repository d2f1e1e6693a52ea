//! Database initialization utilities
//!
//! Executes the SQL migration files against a SQLite pool to set up the
//! schema. Every statement is idempotent, so running the initialization
//! on an existing database is safe.

use sqlx::SqlitePool;
use std::fs;
use std::path::Path;

/// Initialize the database by executing migration files in ascending order
///
/// Reads all SQL files from the migrations directory and executes them in
/// alphabetical/numerical order.
pub async fn init_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    execute_sql_files_in_order(pool, &migrations_dir).await
}

async fn execute_sql_files_in_order(pool: &SqlitePool, dir: &Path) -> Result<(), sqlx::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let sql = fs::read_to_string(entry.path()).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}
