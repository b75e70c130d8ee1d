use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;

#[async_trait]
pub trait MarkAllAsReadUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), NotificationError>;
}
