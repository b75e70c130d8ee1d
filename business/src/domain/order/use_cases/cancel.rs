use async_trait::async_trait;

use crate::domain::order::errors::OrderError;

pub struct CancelOrderParams {
    pub id: String,
}

#[async_trait]
pub trait CancelOrderUseCase: Send + Sync {
    async fn execute(&self, params: CancelOrderParams) -> Result<(), OrderError>;
}
