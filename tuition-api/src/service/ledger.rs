use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::Validate;

use tuition_db::models::account::NewAccount;
use tuition_db::models::common_enums::UserRole;
use tuition_db::models::fee_record::{FeeRecordModel, NewFeeRecord};
use tuition_db::models::overview::LedgerOverview;
use tuition_db::repository::fee_ledger_repository::FeeLedgerRepository;

use crate::domain::registration::{GeneratedCredential, RegisterStudentRequest};
use crate::error::{ApiError, ApiResult};

/// Fee ledger operations: registration, payment application, lookups and
/// the dashboard aggregate.
#[derive(Clone)]
pub struct FeeLedgerService {
    ledger: Arc<dyn FeeLedgerRepository>,
}

impl FeeLedgerService {
    pub fn new(ledger: Arc<dyn FeeLedgerRepository>) -> Self {
        Self { ledger }
    }

    /// Register a student: generate a credential, create the account and
    /// the fee record atomically, and hand the credential back once.
    pub async fn register(
        &self,
        request: RegisterStudentRequest,
    ) -> ApiResult<(FeeRecordModel, GeneratedCredential)> {
        request
            .validate()
            .map_err(|err| ApiError::ValidationError(err.to_string()))?;

        let credential = GeneratedCredential::for_student(&request.name);
        let account = NewAccount {
            username: credential.username.clone(),
            password: credential.password.clone(),
            role: UserRole::Student,
        };
        let record = NewFeeRecord {
            name: request.name,
            phone: request.phone,
            email: request.email,
            course: request.course,
            total_fee: request.total_fee,
            due_date: request.due_date,
        };

        let (_, record) = self.ledger.register(account, record).await?;
        Ok((record, credential))
    }

    /// Apply a payment and return the updated record.
    pub async fn apply_payment(&self, id: i64, amount: Decimal) -> ApiResult<FeeRecordModel> {
        self.ledger
            .apply_payment(id, amount)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("no fee record with id {id}")))
    }

    /// The record owned by `account_id`, for the self-service view.
    pub async fn get_by_owner(&self, account_id: i64) -> ApiResult<FeeRecordModel> {
        self.ledger
            .find_by_account_id(account_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("no fee record for account {account_id}")))
    }

    pub async fn list_all(&self) -> ApiResult<Vec<FeeRecordModel>> {
        Ok(self.ledger.list_all().await?)
    }

    /// Dashboard aggregate over the full ledger.
    pub async fn overview(&self, today: NaiveDate) -> ApiResult<LedgerOverview> {
        let records = self.ledger.list_all().await?;
        Ok(LedgerOverview::from_records(&records, today))
    }
}
