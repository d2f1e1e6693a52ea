use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reminder sent for a fee record. Created only by the reminder
/// sweep and immutable thereafter; the log is append-only with no
/// retention policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationModel {
    pub id: i64,

    /// The fee record this reminder concerns (many-to-one, non-owning)
    pub fee_record_id: i64,

    /// Calendar date of dispatch
    pub reminder_date: NaiveDate,

    /// Delivery channel label
    pub channel: String,

    pub status: String,

    /// Rendered text sent to the student
    pub message: String,
}

/// Notification fields for insertion.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub fee_record_id: i64,
    pub reminder_date: NaiveDate,
    pub channel: String,
    pub status: String,
    pub message: String,
}

/// A notification joined with the student display name, for the admin
/// reminder log view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationView {
    pub id: i64,
    pub fee_record_id: i64,
    pub student_name: String,
    pub reminder_date: NaiveDate,
    pub channel: String,
    pub status: String,
    pub message: String,
}
