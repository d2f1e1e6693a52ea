use rust_decimal::Decimal;
use std::error::Error;

use tuition_db::models::fee_record::FeeRecordModel;

use crate::utils::TryFromRow;

use super::repo_impl::FeeRecordRepositoryImpl;

impl FeeRecordRepositoryImpl {
    /// Read-modify-write of `paid_amount` + `payment_status` in one
    /// transaction, so a concurrent sweep observes either the old pair or
    /// the new pair, never a mix.
    pub(super) async fn apply_payment_impl(
        &self,
        id: i64,
        amount: Decimal,
    ) -> Result<Option<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            SELECT * FROM fee_records WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut record = FeeRecordModel::try_from_row(&row)?;
        record.apply_payment(amount);

        sqlx::query(
            r#"
            UPDATE fee_records SET paid_amount = ?1, payment_status = ?2 WHERE id = ?3
            "#,
        )
        .bind(record.paid_amount.to_string())
        .bind(record.payment_status)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(record))
    }
}
