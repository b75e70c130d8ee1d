use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;

pub struct MarkAsReadParams {
    pub id: String,
}

#[async_trait]
pub trait MarkAsReadUseCase: Send + Sync {
    async fn execute(&self, params: MarkAsReadParams) -> Result<(), NotificationError>;
}
