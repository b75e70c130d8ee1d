use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::Coupon;

/// Backend port for coupon verification.
#[async_trait]
pub trait CouponGateway: Send + Sync {
    async fn verify(&self, code: &str) -> Result<Coupon, GatewayError>;
}
