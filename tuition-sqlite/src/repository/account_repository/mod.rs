mod create;
mod find_by_username;
mod repo_impl;

pub use repo_impl::AccountRepositoryImpl;
