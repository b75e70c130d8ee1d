use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::totals::CartTotals;
use crate::domain::cart::use_cases::get_cart::{CartView, GetCartUseCase};

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> CartView {
        let cart = self.repository.load().await;
        CartView {
            totals: CartTotals::of(&cart),
            coupon: cart.coupon().cloned(),
            items: cart.items().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::add_item::tests::FakeCartRepo;
    use crate::domain::cart::model::{Cart, CartItem};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn should_compute_totals_over_current_lines() {
        let mut cart = Cart::default();
        cart.add(CartItem::new("p1", "Mug", Decimal::from(10), None, 2).unwrap());
        cart.add(CartItem::new("p2", "Lamp", Decimal::from(30), None, 1).unwrap());
        let use_case = GetCartUseCaseImpl {
            repository: FakeCartRepo::with(cart),
        };

        let view = use_case.execute().await;

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.totals.subtotal, Decimal::from(50));
        assert_eq!(view.totals.total, Decimal::from(50));
        assert!(view.coupon.is_none());
    }
}
