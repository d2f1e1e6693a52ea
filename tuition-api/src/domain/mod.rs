pub mod auth;
pub mod payment;
pub mod registration;
pub mod reminder;

// Re-exports
pub use auth::*;
pub use payment::*;
pub use registration::*;
pub use reminder::*;
