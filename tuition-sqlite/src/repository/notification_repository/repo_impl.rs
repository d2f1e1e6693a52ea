use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::error::Error;

use tuition_db::models::notification::{NewNotification, NotificationModel, NotificationView};
use tuition_db::repository::notification_log_repository::NotificationLogRepository;

use crate::utils::TryFromRow;

pub struct NotificationRepositoryImpl {
    pub pool: SqlitePool,
}

impl NotificationRepositoryImpl {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TryFromRow<SqliteRow> for NotificationModel {
    fn try_from_row(row: &SqliteRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(NotificationModel {
            id: row.try_get("id")?,
            fee_record_id: row.try_get("fee_record_id")?,
            reminder_date: row.try_get("reminder_date")?,
            channel: row.try_get("channel")?,
            status: row.try_get("status")?,
            message: row.try_get("message")?,
        })
    }
}

impl TryFromRow<SqliteRow> for NotificationView {
    fn try_from_row(row: &SqliteRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(NotificationView {
            id: row.try_get("id")?,
            fee_record_id: row.try_get("fee_record_id")?,
            student_name: row.try_get("student_name")?,
            reminder_date: row.try_get("reminder_date")?,
            channel: row.try_get("channel")?,
            status: row.try_get("status")?,
            message: row.try_get("message")?,
        })
    }
}

#[async_trait]
impl NotificationLogRepository for NotificationRepositoryImpl {
    async fn append_with_stamp(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationModel, Box<dyn Error + Send + Sync>> {
        self.append_with_stamp_impl(notification).await
    }

    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<NotificationView>, Box<dyn Error + Send + Sync>> {
        self.list_recent_impl(limit).await
    }
}
