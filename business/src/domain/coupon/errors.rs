use crate::domain::errors::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum CouponError {
    #[error("coupon.expired")]
    Expired,
    #[error("coupon.min_purchase_not_met")]
    MinPurchaseNotMet,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
