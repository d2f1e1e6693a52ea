use rust_decimal::Decimal;
use std::error::Error;

use tuition_db::models::account::{AccountModel, NewAccount};
use tuition_db::models::common_enums::PaymentStatus;
use tuition_db::models::fee_record::{FeeRecordModel, NewFeeRecord};

use super::repo_impl::FeeRecordRepositoryImpl;

impl FeeRecordRepositoryImpl {
    /// Account identity and fee record are inserted in one transaction:
    /// both persist, or neither.
    pub(super) async fn register_impl(
        &self,
        account: NewAccount,
        record: NewFeeRecord,
    ) -> Result<(AccountModel, FeeRecordModel), Box<dyn Error + Send + Sync>> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO accounts (username, password, role)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&account.username)
        .bind(&account.password)
        .bind(account.role)
        .execute(&mut *tx)
        .await?;
        let account_id = result.last_insert_rowid();

        let result = sqlx::query(
            r#"
            INSERT INTO fee_records
                (account_id, name, phone, email, course, total_fee, paid_amount, due_date, payment_status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(account_id)
        .bind(&record.name)
        .bind(&record.phone)
        .bind(&record.email)
        .bind(&record.course)
        .bind(record.total_fee.to_string())
        .bind(Decimal::ZERO.to_string())
        .bind(record.due_date)
        .bind(PaymentStatus::Pending)
        .execute(&mut *tx)
        .await?;
        let record_id = result.last_insert_rowid();

        tx.commit().await?;

        let account = AccountModel {
            id: account_id,
            username: account.username,
            password: account.password,
            role: account.role,
        };
        let record = FeeRecordModel {
            id: record_id,
            account_id,
            name: record.name,
            phone: record.phone,
            email: record.email,
            course: record.course,
            total_fee: record.total_fee,
            paid_amount: Decimal::ZERO,
            due_date: record.due_date,
            payment_status: PaymentStatus::Pending,
            last_reminder_date: None,
        };
        Ok((account, record))
    }
}
