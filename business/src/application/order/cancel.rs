use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::bus::InvalidationBus;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::use_cases::cancel::{CancelOrderParams, CancelOrderUseCase};

pub struct CancelOrderUseCaseImpl {
    pub orders: Arc<dyn OrderGateway>,
    pub bus: InvalidationBus,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CancelOrderUseCase for CancelOrderUseCaseImpl {
    async fn execute(&self, params: CancelOrderParams) -> Result<(), OrderError> {
        self.orders.cancel(&params.id).await?;
        self.logger.info(&format!("Order {} cancelled", params.id));
        // The backend raises a notification for the cancellation; nudge
        // every inbox view to re-fetch.
        self.bus.publish();
        Ok(())
    }
}
