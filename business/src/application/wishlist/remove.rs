use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::gateway::WishlistGateway;
use crate::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

pub struct RemoveFromWishlistUseCaseImpl {
    pub wishlist: Arc<dyn WishlistGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromWishlistUseCase for RemoveFromWishlistUseCaseImpl {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), GatewayError> {
        self.wishlist.remove(&params.product_id).await?;
        self.logger
            .debug(&format!("Removed {} from wishlist", params.product_id));
        Ok(())
    }
}
