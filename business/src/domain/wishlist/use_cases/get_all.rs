use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::product::model::Product;

#[async_trait]
pub trait GetWishlistUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, GatewayError>;
}
