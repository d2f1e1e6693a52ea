use std::error::Error;

use tuition_db::models::fee_record::FeeRecordModel;

use crate::utils::TryFromRow;

use super::repo_impl::FeeRecordRepositoryImpl;

impl FeeRecordRepositoryImpl {
    /// Primary-key order keeps the admin listing deterministic.
    pub(super) async fn list_all_impl(
        &self,
    ) -> Result<Vec<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM fee_records ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(FeeRecordModel::try_from_row).collect()
    }
}
