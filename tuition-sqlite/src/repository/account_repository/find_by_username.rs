use std::error::Error;

use tuition_db::models::account::AccountModel;

use crate::utils::TryFromRow;

use super::repo_impl::AccountRepositoryImpl;

impl AccountRepositoryImpl {
    pub(super) async fn find_by_username_impl(
        &self,
        username: &str,
    ) -> Result<Option<AccountModel>, Box<dyn Error + Send + Sync>> {
        let row = sqlx::query(
            r#"
            SELECT * FROM accounts WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(AccountModel::try_from_row).transpose()
    }
}
