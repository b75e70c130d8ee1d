use async_trait::async_trait;

use crate::domain::errors::GatewayError;

pub struct DeleteProductParams {
    pub id: String,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), GatewayError>;
}
