use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{CreatedOrder, NewOrder, Order, OrderSummary};

/// Backend port for orders.
///
/// `payment_redirect` obtains the external gateway URL for an electronic
/// payment without creating the order; the creation call happens after
/// redirect-return (see the finalize-payment use case).
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create(&self, order: &NewOrder) -> Result<CreatedOrder, GatewayError>;
    async fn payment_redirect(&self, order: &NewOrder) -> Result<String, GatewayError>;
    async fn get_all(&self) -> Result<Vec<Order>, GatewayError>;
    async fn get_by_id(&self, id: &str) -> Result<Order, GatewayError>;
    async fn cancel(&self, id: &str) -> Result<(), GatewayError>;
    async fn refund(&self, id: &str) -> Result<(), GatewayError>;
    async fn summary(&self) -> Result<OrderSummary, GatewayError>;
}
