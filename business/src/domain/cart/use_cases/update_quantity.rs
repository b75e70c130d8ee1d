use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct UpdateQuantityParams {
    pub product_id: String,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<Cart, CartError>;
}
