use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;

pub struct FinalizePaymentParams {
    /// Full return URL handed back by the payment gateway, including the
    /// response-code query parameter.
    pub return_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FinalizeOutcome {
    Created { order_id: String },
    /// The idempotency flag was already set; no creation call was issued.
    AlreadyProcessed,
    /// No pending order exists in the session store.
    NothingPending,
    /// The gateway reported a non-success response code.
    PaymentFailed { code: String },
}

#[async_trait]
pub trait FinalizePaymentUseCase: Send + Sync {
    async fn execute(&self, params: FinalizePaymentParams)
    -> Result<FinalizeOutcome, CheckoutError>;
}
