use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::error::Error;

use tuition_db::models::account::{AccountModel, NewAccount};
use tuition_db::models::fee_record::{FeeRecordModel, NewFeeRecord};
use tuition_db::repository::fee_ledger_repository::FeeLedgerRepository;

use crate::utils::{get_decimal, TryFromRow};

pub struct FeeRecordRepositoryImpl {
    pub pool: SqlitePool,
}

impl FeeRecordRepositoryImpl {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<SqliteRow> for FeeRecordModel {
    fn try_from_row(row: &SqliteRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(FeeRecordModel {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            course: row.try_get("course")?,
            total_fee: get_decimal(row, "total_fee")?,
            paid_amount: get_decimal(row, "paid_amount")?,
            due_date: row.try_get("due_date")?,
            payment_status: row.try_get("payment_status")?,
            last_reminder_date: row.try_get("last_reminder_date")?,
        })
    }
}

#[async_trait]
impl FeeLedgerRepository for FeeRecordRepositoryImpl {
    async fn register(
        &self,
        account: NewAccount,
        record: NewFeeRecord,
    ) -> Result<(AccountModel, FeeRecordModel), Box<dyn Error + Send + Sync>> {
        self.register_impl(account, record).await
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        self.find_by_id_impl(id).await
    }

    async fn find_by_account_id(
        &self,
        account_id: i64,
    ) -> Result<Option<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        self.find_by_account_id_impl(account_id).await
    }

    async fn list_all(&self) -> Result<Vec<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        self.list_all_impl().await
    }

    async fn apply_payment(
        &self,
        id: i64,
        amount: Decimal,
    ) -> Result<Option<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        self.apply_payment_impl(id, amount).await
    }

    async fn find_reminder_candidates(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        self.find_reminder_candidates_impl(today).await
    }
}
