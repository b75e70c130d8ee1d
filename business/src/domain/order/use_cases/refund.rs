use async_trait::async_trait;

use crate::domain::order::errors::OrderError;

pub struct RefundOrderParams {
    pub id: String,
}

#[async_trait]
pub trait RefundOrderUseCase: Send + Sync {
    async fn execute(&self, params: RefundOrderParams) -> Result<(), OrderError>;
}
