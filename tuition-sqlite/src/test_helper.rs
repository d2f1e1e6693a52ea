//! Test helper module providing an isolated in-memory database per test.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use tuition_db::models::account::NewAccount;
use tuition_db::models::common_enums::UserRole;
use tuition_db::models::fee_record::NewFeeRecord;

use crate::db_init::init_database;
use crate::sqlite_repositories::SqliteRepositories;

/// Test context over a fresh in-memory database.
pub struct TestContext {
    pub pool: SqlitePool,
    pub repos: SqliteRepositories,
}

/// Connect an in-memory SQLite database, run the migrations and build the
/// repository set. A single connection keeps every statement on the same
/// in-memory instance.
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>>
{
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    init_database(&pool).await?;

    Ok(TestContext {
        repos: SqliteRepositories::new(pool.clone()),
        pool,
    })
}

pub fn test_account(username: &str) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        password: "password123".to_string(),
        role: UserRole::Student,
    }
}

pub fn test_fee_record(name: &str, total_fee: i64, due_date: NaiveDate) -> NewFeeRecord {
    NewFeeRecord {
        name: name.to_string(),
        phone: Some("555-0100".to_string()),
        email: None,
        course: Some("Mathematics".to_string()),
        total_fee: Decimal::new(total_fee, 0),
        due_date,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
