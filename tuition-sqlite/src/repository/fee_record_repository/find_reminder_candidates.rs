use chrono::{Duration, NaiveDate};
use std::error::Error;

use tuition_db::models::common_enums::PaymentStatus;
use tuition_db::models::fee_record::{FeeRecordModel, REMINDER_COOLDOWN_DAYS};

use crate::utils::TryFromRow;

use super::repo_impl::FeeRecordRepositoryImpl;

impl FeeRecordRepositoryImpl {
    /// Records eligible for a reminder on `today`: pending, due date
    /// reached, and last reminded at least the cooldown ago (ISO dates
    /// stored as TEXT compare correctly).
    pub(super) async fn find_reminder_candidates_impl(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        let cooldown_cutoff = today - Duration::days(REMINDER_COOLDOWN_DAYS);

        let rows = sqlx::query(
            r#"
            SELECT * FROM fee_records
            WHERE payment_status = ?1
              AND due_date <= ?2
              AND (last_reminder_date IS NULL OR last_reminder_date <= ?3)
            ORDER BY id ASC
            "#,
        )
        .bind(PaymentStatus::Pending)
        .bind(today)
        .bind(cooldown_cutoff)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(FeeRecordModel::try_from_row).collect()
    }
}
