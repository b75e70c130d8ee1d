use async_trait::async_trait;

use crate::domain::errors::GatewayError;

pub struct AddToWishlistParams {
    pub product_id: String,
}

#[async_trait]
pub trait AddToWishlistUseCase: Send + Sync {
    async fn execute(&self, params: AddToWishlistParams) -> Result<(), GatewayError>;
}
