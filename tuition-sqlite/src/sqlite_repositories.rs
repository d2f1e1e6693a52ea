use std::sync::Arc;

use sqlx::SqlitePool;

use crate::repository::account_repository::AccountRepositoryImpl;
use crate::repository::fee_record_repository::FeeRecordRepositoryImpl;
use crate::repository::notification_repository::NotificationRepositoryImpl;

/// The SQLite-backed repository set, sharing one connection pool. Both
/// the HTTP layer and the reminder sweep are handed repositories from
/// here rather than reaching for the pool directly.
#[derive(Clone)]
pub struct SqliteRepositories {
    pub accounts: Arc<AccountRepositoryImpl>,
    pub ledger: Arc<FeeRecordRepositoryImpl>,
    pub notifications: Arc<NotificationRepositoryImpl>,
}

impl SqliteRepositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            accounts: Arc::new(AccountRepositoryImpl::new(pool.clone())),
            ledger: Arc::new(FeeRecordRepositoryImpl::new(pool.clone())),
            notifications: Arc::new(NotificationRepositoryImpl::new(pool)),
        }
    }
}
