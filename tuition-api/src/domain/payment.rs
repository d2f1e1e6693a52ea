use rust_decimal::Decimal;
use serde::Deserialize;

/// Payment application body. Any amount is accepted, including negative
/// or overshooting values; see DESIGN.md.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub amount: Decimal,
}
