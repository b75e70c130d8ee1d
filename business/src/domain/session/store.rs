use async_trait::async_trait;

use crate::domain::checkout::model::PendingOrder;
use crate::domain::errors::StorageError;

/// Session-persistent key-value state surviving between commands:
/// the parked order payload for the payment round-trip and the
/// order-created idempotency flag.
///
/// Read-modify-write with no atomicity guarantee; the store is
/// single-session by contract.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save_pending_order(&self, order: &PendingOrder) -> Result<(), StorageError>;
    async fn load_pending_order(&self) -> Result<Option<PendingOrder>, StorageError>;
    async fn clear_pending_order(&self) -> Result<(), StorageError>;

    async fn order_created_flag(&self) -> Result<bool, StorageError>;
    async fn set_order_created_flag(&self) -> Result<(), StorageError>;
    async fn clear_order_created_flag(&self) -> Result<(), StorageError>;
}
