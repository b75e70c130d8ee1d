use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::OrderSummary;
use crate::domain::order::use_cases::summary::OrderSummaryUseCase;

pub struct OrderSummaryUseCaseImpl {
    pub orders: Arc<dyn OrderGateway>,
}

#[async_trait]
impl OrderSummaryUseCase for OrderSummaryUseCaseImpl {
    async fn execute(&self) -> Result<OrderSummary, OrderError> {
        Ok(self.orders.summary().await?)
    }
}
