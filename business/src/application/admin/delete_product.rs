use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::admin::gateway::AdminGateway;
use crate::domain::admin::use_cases::delete_product::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct DeleteProductUseCaseImpl {
    pub admin: Arc<dyn AdminGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), GatewayError> {
        self.admin.delete_product(&params.id).await?;
        self.logger.info(&format!("Product {} deleted", params.id));
        Ok(())
    }
}
