use uuid::Uuid;

use crate::domain::repository::NotificationRepository;
use crate::error::ServiceError;

// ── DismissNotification ──────────────────────────────────────────────────────

pub struct DismissNotificationUseCase<N: NotificationRepository> {
    pub repo: N,
}

impl<N: NotificationRepository> DismissNotificationUseCase<N> {
    /// Mark a notification read ("dismissed"). A notification that does not
    /// belong to the caller is left untouched — silent no-op, no error.
    pub async fn execute(&self, notification_id: Uuid, user_id: Uuid) -> Result<(), ServiceError> {
        self.repo.mark_read(notification_id, user_id).await
    }
}
