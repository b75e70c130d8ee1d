use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::PAYMENT_SUCCESS_CODE;
use crate::domain::checkout::use_cases::finalize_payment::{
    FinalizeOutcome, FinalizePaymentParams, FinalizePaymentUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::NewOrder;
use crate::domain::session::store::SessionStore;

/// How long the order-created flag lives before the delayed removal, so a
/// later legitimate order is not blocked.
pub const ORDER_CREATED_FLAG_TTL: Duration = Duration::from_secs(5);

pub struct FinalizePaymentUseCaseImpl {
    pub cart: Arc<dyn CartRepository>,
    pub orders: Arc<dyn OrderGateway>,
    pub session: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
    pub flag_ttl: Duration,
}

#[async_trait]
impl FinalizePaymentUseCase for FinalizePaymentUseCaseImpl {
    async fn execute(
        &self,
        params: FinalizePaymentParams,
    ) -> Result<FinalizeOutcome, CheckoutError> {
        let url =
            Url::parse(&params.return_url).map_err(|_| CheckoutError::InvalidReturnUrl)?;
        let code = url
            .query_pairs()
            .find(|(key, _)| key == "code")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        if code != PAYMENT_SUCCESS_CODE {
            self.session.clear_pending_order().await?;
            self.logger
                .warn(&format!("Payment gateway returned code {code:?}"));
            return Ok(FinalizeOutcome::PaymentFailed { code });
        }

        let Some(pending) = self.session.load_pending_order().await? else {
            return Ok(FinalizeOutcome::NothingPending);
        };

        if self.session.order_created_flag().await? {
            self.logger.info("Order already processed, skipping creation");
            return Ok(FinalizeOutcome::AlreadyProcessed);
        }

        let order = NewOrder {
            items: pending.items,
            delivery: pending.delivery,
            payment_method: pending.payment_method,
            coupon_code: pending.coupon_code,
            totals: pending.totals,
        };
        let created = self.orders.create(&order).await?;

        // A crash between the create call above and the flag write below
        // can still duplicate the order; the guard is best-effort and
        // single-session.
        self.session.set_order_created_flag().await?;
        self.session.clear_pending_order().await?;
        self.cart.clear().await;

        let session = self.session.clone();
        let logger = self.logger.clone();
        let ttl = self.flag_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if session.clear_order_created_flag().await.is_err() {
                logger.warn("Failed to expire order-created flag");
            }
        });

        self.logger
            .info(&format!("Order {} created after payment", created.order_id));
        Ok(FinalizeOutcome::Created {
            order_id: created.order_id,
        })
    }
}
