use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::gateway::AdminGateway;
use crate::domain::admin::use_cases::update_product::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

pub struct UpdateProductUseCaseImpl {
    pub admin: Arc<dyn AdminGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, GatewayError> {
        let product = self.admin.update_product(&params.id, &params.upload).await?;
        self.logger
            .info(&format!("Product {} updated", product.id));
        Ok(product)
    }
}
