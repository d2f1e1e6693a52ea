use std::error::Error;

use tuition_db::models::fee_record::FeeRecordModel;

use crate::utils::TryFromRow;

use super::repo_impl::FeeRecordRepositoryImpl;

impl FeeRecordRepositoryImpl {
    pub(super) async fn find_by_account_id_impl(
        &self,
        account_id: i64,
    ) -> Result<Option<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT * FROM fee_records WHERE account_id = ?1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(FeeRecordModel::try_from_row).transpose()
    }
}
