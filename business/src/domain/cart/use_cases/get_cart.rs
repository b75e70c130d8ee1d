use async_trait::async_trait;

use crate::domain::cart::model::CartItem;
use crate::domain::cart::totals::CartTotals;
use crate::domain::coupon::model::Coupon;

/// Cart contents plus derived amounts, as one read model.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub coupon: Option<Coupon>,
    pub totals: CartTotals,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self) -> CartView;
}
