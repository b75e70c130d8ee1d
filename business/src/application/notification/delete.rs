use std::sync::Arc;

use async_trait::async_trait;

use crate::application::notification::hub::NotificationHub;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::use_cases::delete::{
    DeleteNotificationParams, DeleteNotificationUseCase,
};

pub struct DeleteNotificationUseCaseImpl {
    pub hub: Arc<NotificationHub>,
}

#[async_trait]
impl DeleteNotificationUseCase for DeleteNotificationUseCaseImpl {
    async fn execute(&self, params: DeleteNotificationParams) -> Result<(), NotificationError> {
        self.hub.delete(&params.id).await
    }
}
