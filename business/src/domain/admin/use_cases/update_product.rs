use async_trait::async_trait;

use crate::domain::admin::gateway::ProductUpload;
use crate::domain::errors::GatewayError;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    pub id: String,
    pub upload: ProductUpload,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, GatewayError>;
}
