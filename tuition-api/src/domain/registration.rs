use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Starter password handed to every newly registered student.
pub const STARTER_PASSWORD: &str = "password123";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterStudentRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    pub phone: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,

    #[validate(custom(function = validate_fee_amount))]
    pub total_fee: Decimal,

    pub due_date: NaiveDate,
}

fn validate_fee_amount(total_fee: &Decimal) -> Result<(), ValidationError> {
    if total_fee.is_sign_negative() {
        return Err(ValidationError::new("total_fee must not be negative"));
    }
    Ok(())
}

/// A system-generated username/password pair, returned once at
/// registration time.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCredential {
    pub username: String,
    pub password: String,
}

impl GeneratedCredential {
    /// Derive a login from the student name: lowercased, whitespace
    /// stripped, with a 4-digit suffix to keep usernames unique.
    pub fn for_student(name: &str) -> Self {
        let base: String = name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let suffix: u32 = rand::thread_rng().gen_range(1000..10000);

        GeneratedCredential {
            username: format!("{base}{suffix}"),
            password: STARTER_PASSWORD.to_string(),
        }
    }
}
