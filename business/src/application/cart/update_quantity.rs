use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{UpdateQuantityParams, UpdateQuantityUseCase};
use crate::domain::logger::Logger;

pub struct UpdateQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<Cart, CartError> {
        let mut cart = self.repository.load().await;
        cart.update_quantity(&params.product_id, params.quantity)?;
        self.repository.save(cart.clone()).await;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::add_item::tests::{FakeCartRepo, NullLogger};
    use crate::domain::cart::model::CartItem;
    use rust_decimal::Decimal;

    fn cart_with_line(product_id: &str, quantity: u32) -> Cart {
        let mut cart = Cart::default();
        cart.add(CartItem::new(product_id, "Mug", Decimal::TEN, None, quantity).unwrap());
        cart
    }

    #[tokio::test]
    async fn should_update_line_quantity() {
        let use_case = UpdateQuantityUseCaseImpl {
            repository: FakeCartRepo::with(cart_with_line("p1", 2)),
            logger: Arc::new(NullLogger),
        };

        let cart = use_case
            .execute(UpdateQuantityParams {
                product_id: "p1".to_string(),
                quantity: 7,
            })
            .await
            .unwrap();

        assert_eq!(cart.items()[0].quantity, 7);
    }

    #[tokio::test]
    async fn should_remove_line_when_quantity_drops_to_zero() {
        let use_case = UpdateQuantityUseCaseImpl {
            repository: FakeCartRepo::with(cart_with_line("p1", 2)),
            logger: Arc::new(NullLogger),
        };

        let cart = use_case
            .execute(UpdateQuantityParams {
                product_id: "p1".to_string(),
                quantity: 0,
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_fail_for_unknown_line() {
        let use_case = UpdateQuantityUseCaseImpl {
            repository: FakeCartRepo::with(cart_with_line("p1", 2)),
            logger: Arc::new(NullLogger),
        };

        let result = use_case
            .execute(UpdateQuantityParams {
                product_id: "nope".to_string(),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }
}
