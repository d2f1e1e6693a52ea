use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use tuition_db::models::notification::NewNotification;
use tuition_db::repository::fee_ledger_repository::FeeLedgerRepository;
use tuition_db::repository::notification_log_repository::NotificationLogRepository;

use crate::domain::reminder::{render_reminder_message, REMINDER_CHANNEL, REMINDER_STATUS_SENT};
use crate::error::ApiResult;

/// One execution of the reminder-eligibility scan.
///
/// The periodic driver lives in the server; keeping the sweep body here
/// with an explicit `today` lets tests run it without a wall clock.
#[derive(Clone)]
pub struct ReminderSweepService {
    ledger: Arc<dyn FeeLedgerRepository>,
    notifications: Arc<dyn NotificationLogRepository>,
}

impl ReminderSweepService {
    pub fn new(
        ledger: Arc<dyn FeeLedgerRepository>,
        notifications: Arc<dyn NotificationLogRepository>,
    ) -> Self {
        Self {
            ledger,
            notifications,
        }
    }

    /// Scan for eligible records and emit one reminder per record.
    ///
    /// Each record's notify-and-stamp is an independent unit of work: a
    /// failure is logged and the remaining candidates still run. Only the
    /// candidate query itself aborts the cycle. Returns how many
    /// reminders were recorded.
    pub async fn run(&self, today: NaiveDate) -> ApiResult<usize> {
        debug!(%today, "checking for due payments");
        let candidates = self.ledger.find_reminder_candidates(today).await?;

        let mut sent = 0;
        for record in candidates {
            let notification = NewNotification {
                fee_record_id: record.id,
                reminder_date: today,
                channel: REMINDER_CHANNEL.to_string(),
                status: REMINDER_STATUS_SENT.to_string(),
                message: render_reminder_message(&record.name, record.due_amount()),
            };
            match self.notifications.append_with_stamp(notification).await {
                Ok(_) => {
                    info!(fee_record_id = record.id, student = %record.name, "reminder sent");
                    sent += 1;
                }
                Err(err) => {
                    warn!(fee_record_id = record.id, error = %err, "failed to record reminder");
                }
            }
        }
        Ok(sent)
    }
}
