pub mod db_init;
pub mod repository;
pub mod sqlite_repositories;
pub mod utils;

pub use sqlite_repositories::SqliteRepositories;
pub use repository::account_repository::AccountRepositoryImpl;
pub use repository::fee_record_repository::FeeRecordRepositoryImpl;
pub use repository::notification_repository::NotificationRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
