use async_trait::async_trait;

use crate::domain::admin::gateway::ProductUpload;
use crate::domain::errors::GatewayError;
use crate::domain::product::model::Product;

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, upload: ProductUpload) -> Result<Product, GatewayError>;
}
