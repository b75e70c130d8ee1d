use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{DeliveryInfo, PaymentMethod};

pub struct PlaceOrderParams {
    pub delivery: DeliveryInfo,
    pub payment_method: PaymentMethod,
}

/// What the confirmation step produced: a finished order, or a redirect
/// to the external payment page with the order parked in the session.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceOrderOutcome {
    Placed { order_id: String },
    RedirectToPayment { url: String },
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<PlaceOrderOutcome, CheckoutError>;
}
