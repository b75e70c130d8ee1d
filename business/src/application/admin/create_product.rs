use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::gateway::{AdminGateway, ProductUpload};
use crate::domain::admin::use_cases::create_product::CreateProductUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct CreateProductUseCaseImpl {
    pub admin: Arc<dyn AdminGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(
        &self,
        upload: ProductUpload,
    ) -> Result<crate::domain::product::model::Product, GatewayError> {
        self.logger
            .info(&format!("Creating product: {}", upload.name));
        let product = self.admin.create_product(&upload).await?;
        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
