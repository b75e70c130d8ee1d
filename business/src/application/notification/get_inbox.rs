use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::gateway::{NotificationGateway, NotificationPage};
use crate::domain::notification::use_cases::get_inbox::{GetInboxParams, GetInboxUseCase};

pub struct GetInboxUseCaseImpl {
    pub gateway: Arc<dyn NotificationGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetInboxUseCase for GetInboxUseCaseImpl {
    async fn execute(&self, params: GetInboxParams) -> Result<NotificationPage, NotificationError> {
        let page = self.gateway.list(params.page, params.page_size).await?;
        self.logger.debug(&format!(
            "Inbox page {}/{} ({} total)",
            page.page, page.total_pages, page.total
        ));
        Ok(page)
    }
}
