use async_trait::async_trait;

use crate::models::account::{AccountModel, NewAccount};

/// Store interface for login identities.
///
/// Lookups return `Ok(None)` for a missing row; the service layer decides
/// not-found semantics.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert an account and return it with the generated key populated.
    async fn create(
        &self,
        account: NewAccount,
    ) -> Result<AccountModel, Box<dyn std::error::Error + Send + Sync>>;

    /// Look up an account by its unique username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountModel>, Box<dyn std::error::Error + Send + Sync>>;
}
