use serde::{Deserialize, Serialize};

use crate::models::common_enums::UserRole;

/// A login identity. Every student fee record is owned by exactly one
/// account; the seeded administrator account owns none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountModel {
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// Stored in clear, matching the reference system. Known deficiency,
    /// see DESIGN.md.
    #[serde(skip_serializing)]
    pub password: String,

    pub role: UserRole,
}

/// Account fields for insertion; the key is generated by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}
