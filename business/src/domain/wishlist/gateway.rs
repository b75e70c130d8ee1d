use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::product::model::Product;

/// Backend port for the server-owned wishlist.
#[async_trait]
pub trait WishlistGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;
    async fn add(&self, product_id: &str) -> Result<(), GatewayError>;
    async fn remove(&self, product_id: &str) -> Result<(), GatewayError>;
}
