use async_trait::async_trait;

use super::model::Cart;

/// Session-scoped cart state. The cart is memory-only by contract, so the
/// port is infallible; it exists to keep use cases testable and the state
/// shared across commands.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Cart;
    async fn save(&self, cart: Cart);
    async fn clear(&self);
}
