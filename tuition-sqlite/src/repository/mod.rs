pub mod account_repository;
pub mod fee_record_repository;
pub mod notification_repository;
