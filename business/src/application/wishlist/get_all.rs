use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::product::model::Product;
use crate::domain::wishlist::gateway::WishlistGateway;
use crate::domain::wishlist::use_cases::get_all::GetWishlistUseCase;

pub struct GetWishlistUseCaseImpl {
    pub wishlist: Arc<dyn WishlistGateway>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, GatewayError> {
        self.wishlist.list().await
    }
}
