use async_trait::async_trait;

use crate::domain::cart::totals::CartTotals;
use crate::domain::coupon::errors::CouponError;

pub struct ApplyCouponParams {
    pub code: String,
}

#[async_trait]
pub trait ApplyCouponUseCase: Send + Sync {
    async fn execute(&self, params: ApplyCouponParams) -> Result<CartTotals, CouponError>;
}
