pub mod accounts;
pub mod ledger;
pub mod notifications;
pub mod sweep;

// Re-exports
pub use accounts::*;
pub use ledger::*;
pub use notifications::*;
pub use sweep::*;
