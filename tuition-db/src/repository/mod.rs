pub mod account_repository;
pub mod fee_ledger_repository;
pub mod notification_log_repository;

// Re-exports
pub use account_repository::*;
pub use fee_ledger_repository::*;
pub use notification_log_repository::*;
