use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::Order;
use crate::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

pub struct GetOrderByIdUseCaseImpl {
    pub orders: Arc<dyn OrderGateway>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError> {
        Ok(self.orders.get_by_id(&params.id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::checkout::place_order::tests::MockOrders;
    use crate::domain::errors::GatewayError;

    #[tokio::test]
    async fn should_map_missing_order_to_not_found() {
        let mut orders = MockOrders::new();
        orders
            .expect_get_by_id()
            .returning(|_| Err(GatewayError::NotFound));
        let use_case = GetOrderByIdUseCaseImpl {
            orders: Arc::new(orders),
        };

        let result = use_case
            .execute(GetOrderByIdParams {
                id: "o-404".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }
}
