use std::error::Error;

use tuition_db::models::fee_record::FeeRecordModel;

use crate::utils::TryFromRow;

use super::repo_impl::FeeRecordRepositoryImpl;

impl FeeRecordRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<FeeRecordModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT * FROM fee_records WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(FeeRecordModel::try_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{date, setup_test_context, test_account, test_fee_record};
    use tuition_db::repository::fee_ledger_repository::FeeLedgerRepository;

    #[tokio::test]
    async fn test_find_by_id_non_existing(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ledger_repo = &ctx.repos.ledger;

        let found = ledger_repo.find_by_id(42).await?;
        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let ledger_repo = &ctx.repos.ledger;

        let (_, record) = ledger_repo
            .register(
                test_account("meena1111"),
                test_fee_record("Meena", 2000, date(2024, 2, 1)),
            )
            .await?;

        let found = ledger_repo.find_by_id(record.id).await?.unwrap();
        assert_eq!(found.name, "Meena");

        Ok(())
    }
}
