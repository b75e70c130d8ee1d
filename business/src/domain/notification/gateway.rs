use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::Notification;

/// One page of the inbox listing.
#[derive(Debug, Clone)]
pub struct NotificationPage {
    pub items: Vec<Notification>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

/// Backend port for the notification inbox.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn list(&self, page: u32, page_size: u32) -> Result<NotificationPage, GatewayError>;
    async fn recent(&self, limit: u32) -> Result<Vec<Notification>, GatewayError>;
    async fn unread_count(&self) -> Result<u64, GatewayError>;
    async fn mark_as_read(&self, id: &str) -> Result<(), GatewayError>;
    async fn mark_all_as_read(&self) -> Result<(), GatewayError>;
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}
