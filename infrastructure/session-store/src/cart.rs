use std::sync::Mutex;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;

/// The session cart. Nothing is written to disk; state lives exactly as
/// long as the process, mirroring a cart that resets with the session.
#[derive(Default)]
pub struct CartRepositoryInMemory {
    state: Mutex<Cart>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn load(&self) -> Cart {
        self.state.lock().map(|cart| cart.clone()).unwrap_or_default()
    }

    async fn save(&self, cart: Cart) {
        if let Ok(mut state) = self.state.lock() {
            *state = cart;
        }
    }

    async fn clear(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.clear();
        }
    }
}
