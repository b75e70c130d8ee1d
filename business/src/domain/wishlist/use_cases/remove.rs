use async_trait::async_trait;

use crate::domain::errors::GatewayError;

pub struct RemoveFromWishlistParams {
    pub product_id: String,
}

#[async_trait]
pub trait RemoveFromWishlistUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), GatewayError>;
}
