use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::gateway::NotificationPage;

pub struct GetInboxParams {
    pub page: u32,
    pub page_size: u32,
}

#[async_trait]
pub trait GetInboxUseCase: Send + Sync {
    async fn execute(&self, params: GetInboxParams) -> Result<NotificationPage, NotificationError>;
}
