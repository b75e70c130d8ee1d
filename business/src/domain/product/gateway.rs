use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::Product;

/// Backend port for the catalog.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Lists products, optionally narrowed by a search query.
    async fn list(&self, query: Option<&str>) -> Result<Vec<Product>, GatewayError>;
    async fn get_by_id(&self, id: &str) -> Result<Product, GatewayError>;
}
