use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemUseCase, RemoveItemParams};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<Cart, CartError> {
        let mut cart = self.repository.load().await;
        cart.remove(&params.product_id)?;
        self.repository.save(cart.clone()).await;
        self.logger
            .debug(&format!("Removed {} from cart", params.product_id));
        Ok(cart)
    }
}
