use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;

pub struct DeleteNotificationParams {
    pub id: String,
}

#[async_trait]
pub trait DeleteNotificationUseCase: Send + Sync {
    async fn execute(&self, params: DeleteNotificationParams) -> Result<(), NotificationError>;
}
