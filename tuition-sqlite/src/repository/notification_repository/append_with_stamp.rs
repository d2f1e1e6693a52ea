use std::error::Error;

use tuition_db::models::notification::{NewNotification, NotificationModel};

use super::repo_impl::NotificationRepositoryImpl;

impl NotificationRepositoryImpl {
    /// Log append and reminder stamp are one transaction per record, so
    /// the log and the ledger can never disagree about the last reminder.
    pub(super) async fn append_with_stamp_impl(
        &self,
        notification: NewNotification,
    ) -> Result<NotificationModel, Box<dyn Error + Send + Sync>> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO notifications (fee_record_id, reminder_date, channel, status, message)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(notification.fee_record_id)
        .bind(notification.reminder_date)
        .bind(&notification.channel)
        .bind(&notification.status)
        .bind(&notification.message)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        sqlx::query(
            r#"
            UPDATE fee_records SET last_reminder_date = ?1 WHERE id = ?2
            "#,
        )
        .bind(notification.reminder_date)
        .bind(notification.fee_record_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(NotificationModel {
            id,
            fee_record_id: notification.fee_record_id,
            reminder_date: notification.reminder_date,
            channel: notification.channel,
            status: notification.status,
            message: notification.message,
        })
    }
}
