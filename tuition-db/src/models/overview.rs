use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::common_enums::PaymentStatus;
use crate::models::fee_record::FeeRecordModel;

/// Aggregate figures for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerOverview {
    pub total_students: i64,
    /// Sum of outstanding balances over pending records
    pub pending_fees: Decimal,
    /// Sum of paid amounts over all records
    pub collected_fees: Decimal,
    /// Pending records whose due date has passed
    pub overdue_count: i64,
}

impl LedgerOverview {
    /// Fold the aggregate out of the full record set. The table is small;
    /// folding `Decimal`s here keeps the arithmetic exact.
    pub fn from_records(records: &[FeeRecordModel], today: NaiveDate) -> Self {
        let mut overview = LedgerOverview {
            total_students: records.len() as i64,
            pending_fees: Decimal::ZERO,
            collected_fees: Decimal::ZERO,
            overdue_count: 0,
        };
        for record in records {
            overview.collected_fees += record.paid_amount;
            if record.payment_status == PaymentStatus::Pending {
                overview.pending_fees += record.due_amount();
                if record.due_date < today {
                    overview.overdue_count += 1;
                }
            }
        }
        overview
    }
}
