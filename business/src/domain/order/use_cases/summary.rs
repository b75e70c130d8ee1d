use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderSummary;

#[async_trait]
pub trait OrderSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<OrderSummary, OrderError>;
}
