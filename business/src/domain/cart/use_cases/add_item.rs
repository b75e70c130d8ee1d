use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct AddItemParams {
    pub product_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
    pub quantity: u32,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<Cart, CartError>;
}
