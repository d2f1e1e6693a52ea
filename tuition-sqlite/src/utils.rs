use rust_decimal::Decimal;
use sqlx::{sqlite::SqliteRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `Decimal` from a TEXT column.
pub fn get_decimal(row: &SqliteRow, col_name: &str) -> Result<Decimal, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    Decimal::from_str(&s)
        .map_err(|_| format!("Value for column '{col_name}' is not a valid decimal: {s}").into())
}
