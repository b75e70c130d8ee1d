use std::sync::Arc;

use async_trait::async_trait;

use crate::application::notification::hub::NotificationHub;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::use_cases::mark_as_read::{MarkAsReadParams, MarkAsReadUseCase};

/// Delegates to the hub so the shared snapshot and every subscriber see
/// the mutation, not just the caller.
pub struct MarkAsReadUseCaseImpl {
    pub hub: Arc<NotificationHub>,
}

#[async_trait]
impl MarkAsReadUseCase for MarkAsReadUseCaseImpl {
    async fn execute(&self, params: MarkAsReadParams) -> Result<(), NotificationError> {
        self.hub.mark_as_read(&params.id).await
    }
}
