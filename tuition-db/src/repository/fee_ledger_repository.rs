use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::account::{AccountModel, NewAccount};
use crate::models::fee_record::{FeeRecordModel, NewFeeRecord};

/// Store interface for student fee records.
///
/// Both the HTTP layer and the reminder sweep sit behind this trait; every
/// mutation is atomic per record (the read-modify-write of
/// `paid_amount` + `payment_status` never interleaves with another write
/// to the same row).
#[async_trait]
pub trait FeeLedgerRepository: Send + Sync {
    /// Insert the account identity and its fee record in one transaction:
    /// both are persisted, or neither.
    async fn register(
        &self,
        account: NewAccount,
        record: NewFeeRecord,
    ) -> Result<(AccountModel, FeeRecordModel), Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<FeeRecordModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Self-service lookup by the owning account.
    async fn find_by_account_id(
        &self,
        account_id: i64,
    ) -> Result<Option<FeeRecordModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// All records in primary-key order.
    async fn list_all(
        &self,
    ) -> Result<Vec<FeeRecordModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Add `amount` to the record's paid amount and recompute its status
    /// in a single transaction. Returns `Ok(None)` for an unknown id.
    async fn apply_payment(
        &self,
        id: i64,
        amount: Decimal,
    ) -> Result<Option<FeeRecordModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Records eligible for a reminder on `today`: pending, due date
    /// reached, and past the re-notification cooldown.
    async fn find_reminder_candidates(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<FeeRecordModel>, Box<dyn std::error::Error + Send + Sync>>;
}
