use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::error::Error;

use tuition_db::models::account::{AccountModel, NewAccount};
use tuition_db::repository::account_repository::AccountRepository;

use crate::utils::TryFromRow;

pub struct AccountRepositoryImpl {
    pub pool: SqlitePool,
}

impl AccountRepositoryImpl {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<SqliteRow> for AccountModel {
    fn try_from_row(row: &SqliteRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AccountModel {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
            role: row.try_get("role")?,
        })
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(
        &self,
        account: NewAccount,
    ) -> Result<AccountModel, Box<dyn Error + Send + Sync>> {
        self.create_impl(account).await
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        self.find_by_username_impl(username).await
    }
}
