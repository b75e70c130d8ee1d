#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.name_empty")]
    NameEmpty,
    #[error("cart.quantity_zero")]
    QuantityZero,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.empty")]
    Empty,
}
