use std::sync::Arc;

use async_trait::async_trait;

use crate::application::notification::hub::NotificationHub;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::use_cases::mark_all_as_read::MarkAllAsReadUseCase;

pub struct MarkAllAsReadUseCaseImpl {
    pub hub: Arc<NotificationHub>,
}

#[async_trait]
impl MarkAllAsReadUseCase for MarkAllAsReadUseCaseImpl {
    async fn execute(&self) -> Result<(), NotificationError> {
        self.hub.mark_all_as_read().await
    }
}
