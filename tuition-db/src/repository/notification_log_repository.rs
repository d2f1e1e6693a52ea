use async_trait::async_trait;

use crate::models::notification::{NewNotification, NotificationModel, NotificationView};

/// Store interface for the append-only reminder log.
#[async_trait]
pub trait NotificationLogRepository: Send + Sync {
    /// Append a notification and stamp the fee record's last reminder
    /// date in one transaction, so a sweep interrupted between the two
    /// writes can never leave them disagreeing.
    async fn append_with_stamp(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationModel, Box<dyn std::error::Error + Send + Sync>>;

    /// Most recent notifications first, joined with the student display
    /// name. Ordered by reminder date descending, ties broken by id
    /// descending.
    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<NotificationView>, Box<dyn std::error::Error + Send + Sync>>;
}
