mod apply_payment;
mod find_by_account_id;
mod find_by_id;
mod find_reminder_candidates;
mod list_all;
mod register;
mod repo_impl;

pub use repo_impl::FeeRecordRepositoryImpl;
