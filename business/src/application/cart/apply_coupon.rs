use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::totals::CartTotals;
use crate::domain::cart::use_cases::apply_coupon::{ApplyCouponParams, ApplyCouponUseCase};
use crate::domain::coupon::errors::CouponError;
use crate::domain::coupon::gateway::CouponGateway;
use crate::domain::logger::Logger;

pub struct ApplyCouponUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub coupons: Arc<dyn CouponGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ApplyCouponUseCase for ApplyCouponUseCaseImpl {
    async fn execute(&self, params: ApplyCouponParams) -> Result<CartTotals, CouponError> {
        let mut cart = self.repository.load().await;

        let coupon = self.coupons.verify(&params.code).await?;
        coupon.validate_for(cart.subtotal(), Utc::now())?;

        self.logger
            .info(&format!("Applied coupon {}", coupon.code));
        cart.set_coupon(coupon);
        let totals = CartTotals::of(&cart);
        self.repository.save(cart).await;

        Ok(totals)
    }
}
