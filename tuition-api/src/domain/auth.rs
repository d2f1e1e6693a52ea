use serde::{Deserialize, Serialize};
use tuition_db::models::common_enums::UserRole;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: UserRole,
    pub username: String,
}
