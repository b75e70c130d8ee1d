use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::totals::CartTotals;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{PaymentMethod, PendingOrder};
use crate::domain::checkout::use_cases::place_order::{
    PlaceOrderOutcome, PlaceOrderParams, PlaceOrderUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::NewOrder;
use crate::domain::session::store::SessionStore;

pub struct PlaceOrderUseCaseImpl {
    pub cart: Arc<dyn CartRepository>,
    pub orders: Arc<dyn OrderGateway>,
    pub session: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<PlaceOrderOutcome, CheckoutError> {
        let cart = self.cart.load().await;
        if cart.is_empty() {
            return Err(CheckoutError::CartEmpty);
        }

        let order = NewOrder {
            items: cart.items().to_vec(),
            delivery: params.delivery,
            payment_method: params.payment_method,
            coupon_code: cart.coupon().map(|coupon| coupon.code.clone()),
            totals: CartTotals::of(&cart),
        };

        match params.payment_method {
            PaymentMethod::Electronic => {
                // The order is NOT created yet: it is parked in the session
                // and submitted for real after redirect-return.
                let url = self.orders.payment_redirect(&order).await?;
                let pending = PendingOrder {
                    items: order.items,
                    delivery: order.delivery,
                    payment_method: order.payment_method,
                    coupon_code: order.coupon_code,
                    totals: order.totals,
                };
                self.session.save_pending_order(&pending).await?;
                self.logger.info("Pending order parked, redirecting to payment");
                Ok(PlaceOrderOutcome::RedirectToPayment { url })
            }
            PaymentMethod::CashOnDelivery => {
                let created = self.orders.create(&order).await?;
                self.cart.clear().await;
                self.logger
                    .info(&format!("Order {} placed", created.order_id));
                Ok(PlaceOrderOutcome::Placed {
                    order_id: created.order_id,
                })
            }
        }
    }
}
