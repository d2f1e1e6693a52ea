mod append_with_stamp;
mod list_recent;
mod repo_impl;

pub use repo_impl::NotificationRepositoryImpl;
