use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::product::model::Product;

pub struct BrowseProductsParams {
    pub query: Option<String>,
}

#[async_trait]
pub trait BrowseProductsUseCase: Send + Sync {
    async fn execute(&self, params: BrowseProductsParams) -> Result<Vec<Product>, GatewayError>;
}
