use std::error::Error;

use tuition_db::models::account::{AccountModel, NewAccount};

use super::repo_impl::AccountRepositoryImpl;

impl AccountRepositoryImpl {
    pub(super) async fn create_impl(
        &self,
        account: NewAccount,
    ) -> Result<AccountModel, Box<dyn Error + Send + Sync>> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (username, password, role)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&account.username)
        .bind(&account.password)
        .bind(account.role)
        .execute(&self.pool)
        .await?;

        Ok(AccountModel {
            id: result.last_insert_rowid(),
            username: account.username,
            password: account.password,
            role: account.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{setup_test_context, test_account};
    use tuition_db::models::common_enums::UserRole;
    use tuition_db::repository::account_repository::AccountRepository;

    #[tokio::test]
    async fn test_create_account() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account_repo = &ctx.repos.accounts;

        let created = account_repo.create(test_account("asharao1234")).await?;

        assert!(created.id > 0);
        assert_eq!(created.username, "asharao1234");
        assert_eq!(created.role, UserRole::Student);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_username_fails(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account_repo = &ctx.repos.accounts;

        account_repo.create(test_account("admin")).await?;
        let result = account_repo.create(test_account("admin")).await;

        assert!(result.is_err());

        Ok(())
    }
}
