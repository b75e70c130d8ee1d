use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::gateway::WishlistGateway;
use crate::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};

pub struct AddToWishlistUseCaseImpl {
    pub wishlist: Arc<dyn WishlistGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToWishlistUseCase for AddToWishlistUseCaseImpl {
    async fn execute(&self, params: AddToWishlistParams) -> Result<(), GatewayError> {
        self.wishlist.add(&params.product_id).await?;
        self.logger
            .debug(&format!("Added {} to wishlist", params.product_id));
        Ok(())
    }
}
