use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use tuition_api::service::accounts::AccountService;
use tuition_api::service::ledger::FeeLedgerService;
use tuition_api::service::notifications::NotificationLogService;
use tuition_api::service::sweep::ReminderSweepService;
use tuition_sqlite::db_init::init_database;
use tuition_sqlite::SqliteRepositories;

use crate::auth::JwtKeys;
use crate::config::Config;

/// Shared by every request handler and the background sweep.
pub struct AppState {
    pub config: Config,
    pub jwt: JwtKeys,
    pub accounts: AccountService,
    pub ledger: FeeLedgerService,
    pub notifications: NotificationLogService,
    pub sweep: ReminderSweepService,
}

impl AppState {
    /// Connect the store, run migrations and seed the administrator
    /// account.
    pub async fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;

        init_database(&pool).await?;
        info!("database ready at {}", config.database_url);

        let state = Self::from_pool(config, pool);
        state
            .accounts
            .ensure_admin(&state.config.admin_username, &state.config.admin_password)
            .await?;

        Ok(state)
    }

    /// Assemble services over an existing pool; tests hand in an
    /// in-memory database here.
    pub fn from_pool(config: Config, pool: SqlitePool) -> Arc<Self> {
        let repos = SqliteRepositories::new(pool);

        Arc::new(Self {
            jwt: JwtKeys::new(&config.jwt_secret),
            accounts: AccountService::new(repos.accounts.clone()),
            ledger: FeeLedgerService::new(repos.ledger.clone()),
            notifications: NotificationLogService::new(repos.notifications.clone()),
            sweep: ReminderSweepService::new(repos.ledger, repos.notifications),
            config,
        })
    }
}
