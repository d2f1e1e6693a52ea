use std::error::Error;

use tuition_db::models::notification::NotificationView;

use crate::utils::TryFromRow;

use super::repo_impl::NotificationRepositoryImpl;

impl NotificationRepositoryImpl {
    /// Most recent first; id descending breaks same-day ties since keys
    /// follow insertion order.
    pub(super) async fn list_recent_impl(
        &self,
        limit: i64,
    ) -> Result<Vec<NotificationView>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(
            r#"
            SELECT n.id, n.fee_record_id, n.reminder_date, n.channel, n.status, n.message,
                   s.name AS student_name
            FROM notifications n
            JOIN fee_records s ON n.fee_record_id = s.id
            ORDER BY n.reminder_date DESC, n.id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(NotificationView::try_from_row).collect()
    }
}
