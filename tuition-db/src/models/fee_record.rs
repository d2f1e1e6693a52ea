use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::common_enums::PaymentStatus;

/// Minimum elapsed days between consecutive reminders for one record.
pub const REMINDER_COOLDOWN_DAYS: i64 = 2;

/// The persisted state of one student's tuition balance.
///
/// `payment_status` is derived from the amounts and recomputed on every
/// payment application; it is never set independently.
/// `last_reminder_date` is written only by the reminder sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRecordModel {
    pub id: i64,

    /// Owning account (1:1)
    pub account_id: i64,

    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,

    pub total_fee: Decimal,
    pub paid_amount: Decimal,

    /// Calendar date, no time component
    pub due_date: NaiveDate,

    pub payment_status: PaymentStatus,

    pub last_reminder_date: Option<NaiveDate>,
}

impl FeeRecordModel {
    /// Outstanding balance at this point in time. May be negative for an
    /// over-paid record; callers propagate it as-is.
    pub fn due_amount(&self) -> Decimal {
        self.total_fee - self.paid_amount
    }

    /// Add `amount` to `paid_amount` and recompute the status. No bound
    /// checks are performed on `amount`; see DESIGN.md.
    pub fn apply_payment(&mut self, amount: Decimal) {
        self.paid_amount += amount;
        self.payment_status = PaymentStatus::derive(self.paid_amount, self.total_fee);
    }

    /// Whether the reminder sweep should select this record on `today`:
    /// still pending, due date reached, and outside the cooldown window.
    pub fn reminder_due(&self, today: NaiveDate) -> bool {
        if self.payment_status != PaymentStatus::Pending || self.due_date > today {
            return false;
        }
        match self.last_reminder_date {
            None => true,
            Some(last) => last + Duration::days(REMINDER_COOLDOWN_DAYS) <= today,
        }
    }
}

/// Fee record fields for insertion. Amounts start at zero paid, status
/// `Pending`, no reminder sent.
#[derive(Debug, Clone)]
pub struct NewFeeRecord {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    pub total_fee: Decimal,
    pub due_date: NaiveDate,
}
