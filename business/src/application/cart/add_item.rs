use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemUseCase, AddItemParams};
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<Cart, CartError> {
        let item = CartItem::new(
            params.product_id,
            params.name,
            params.unit_price,
            params.image_url,
            params.quantity,
        )?;

        let mut cart = self.repository.load().await;
        cart.add(item);
        self.repository.save(cart.clone()).await;

        self.logger
            .debug(&format!("Cart has {} line(s)", cart.items().len()));
        Ok(cart)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    /// Memory-backed stand-in for the session cart.
    pub(crate) struct FakeCartRepo(pub Mutex<Cart>);

    impl FakeCartRepo {
        pub fn empty() -> Arc<Self> {
            Arc::new(Self(Mutex::new(Cart::default())))
        }

        pub fn with(cart: Cart) -> Arc<Self> {
            Arc::new(Self(Mutex::new(cart)))
        }
    }

    #[async_trait]
    impl CartRepository for FakeCartRepo {
        async fn load(&self) -> Cart {
            self.0.lock().unwrap().clone()
        }
        async fn save(&self, cart: Cart) {
            *self.0.lock().unwrap() = cart;
        }
        async fn clear(&self) {
            self.0.lock().unwrap().clear();
        }
    }

    pub(crate) struct NullLogger;

    impl Logger for NullLogger {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn debug(&self, _message: &str) {}
    }

    fn params(product_id: &str, quantity: u32) -> AddItemParams {
        AddItemParams {
            product_id: product_id.to_string(),
            name: "Ceramic mug".to_string(),
            unit_price: Decimal::new(1250, 2),
            image_url: None,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_merge_duplicate_product_into_one_line() {
        let repository = FakeCartRepo::empty();
        let use_case = AddCartItemUseCaseImpl {
            repository: repository.clone(),
            logger: Arc::new(NullLogger),
        };

        use_case.execute(params("p1", 2)).await.unwrap();
        let cart = use_case.execute(params("p1", 3)).await.unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_persist_added_line_in_repository() {
        let repository = FakeCartRepo::empty();
        let use_case = AddCartItemUseCaseImpl {
            repository: repository.clone(),
            logger: Arc::new(NullLogger),
        };

        use_case.execute(params("p1", 1)).await.unwrap();

        assert_eq!(repository.load().await.items().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let use_case = AddCartItemUseCaseImpl {
            repository: FakeCartRepo::empty(),
            logger: Arc::new(NullLogger),
        };

        let result = use_case.execute(params("p1", 0)).await;

        assert!(matches!(result.unwrap_err(), CartError::QuantityZero));
    }
}
