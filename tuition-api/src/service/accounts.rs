use std::sync::Arc;

use tracing::info;
use tuition_db::models::account::{AccountModel, NewAccount};
use tuition_db::models::common_enums::UserRole;
use tuition_db::repository::account_repository::AccountRepository;

use crate::error::{ApiError, ApiResult};

/// Login identity operations.
#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Verify a username/password pair. Failures carry no detail beyond
    /// the generic message; callers map this to a bare 401.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AccountModel> {
        let account = self.accounts.find_by_username(username).await?;
        match account {
            Some(account) if account.password == password => Ok(account),
            _ => Err(ApiError::AuthenticationError(
                "Invalid credentials".to_string(),
            )),
        }
    }

    /// Create the administrator account at startup if it does not exist.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> ApiResult<()> {
        if self.accounts.find_by_username(username).await?.is_none() {
            self.accounts
                .create(NewAccount {
                    username: username.to_string(),
                    password: password.to_string(),
                    role: UserRole::Admin,
                })
                .await?;
            info!(username, "seeded administrator account");
        }
        Ok(())
    }
}
