use std::sync::Arc;

use tuition_db::models::notification::NotificationView;
use tuition_db::repository::notification_log_repository::NotificationLogRepository;

use crate::error::ApiResult;

/// How many log entries the admin view fetches by default.
pub const DEFAULT_REMINDER_LIMIT: i64 = 100;

/// Read side of the reminder log.
#[derive(Clone)]
pub struct NotificationLogService {
    notifications: Arc<dyn NotificationLogRepository>,
}

impl NotificationLogService {
    pub fn new(notifications: Arc<dyn NotificationLogRepository>) -> Self {
        Self { notifications }
    }

    pub async fn list_recent(&self, limit: i64) -> ApiResult<Vec<NotificationView>> {
        Ok(self.notifications.list_recent(limit).await?)
    }
}
