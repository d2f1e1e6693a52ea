pub mod account;
pub mod common_enums;
pub mod fee_record;
pub mod notification;
pub mod overview;

// Re-exports
pub use account::*;
pub use common_enums::*;
pub use fee_record::*;
pub use notification::*;
pub use overview::*;
