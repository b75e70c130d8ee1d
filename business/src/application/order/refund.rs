use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::bus::InvalidationBus;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::use_cases::refund::{RefundOrderParams, RefundOrderUseCase};

pub struct RefundOrderUseCaseImpl {
    pub orders: Arc<dyn OrderGateway>,
    pub bus: InvalidationBus,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefundOrderUseCase for RefundOrderUseCaseImpl {
    async fn execute(&self, params: RefundOrderParams) -> Result<(), OrderError> {
        self.orders.refund(&params.id).await?;
        self.logger
            .info(&format!("Refund requested for order {}", params.id));
        self.bus.publish();
        Ok(())
    }
}
