use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use business::domain::checkout::model::PendingOrder;
use business::domain::errors::StorageError;
use business::domain::session::store::SessionStore;

const PENDING_ORDER_FILE: &str = "pending_order.json";
const ORDER_CREATED_FILE: &str = "order_created";

/// One file per key under the session directory. Read-modify-write with
/// no atomicity guarantee; the store is single-session by contract.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|_| StorageError::Io)
    }

    fn remove_if_present(path: &Path) -> Result<(), StorageError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(_) => Err(StorageError::Io),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save_pending_order(&self, order: &PendingOrder) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let payload = serde_json::to_vec_pretty(order).map_err(|_| StorageError::Corrupt)?;
        fs::write(self.path(PENDING_ORDER_FILE), payload).map_err(|_| StorageError::Io)?;
        debug!(target: "storefront", "Pending order saved");
        Ok(())
    }

    async fn load_pending_order(&self) -> Result<Option<PendingOrder>, StorageError> {
        let raw = match fs::read(self.path(PENDING_ORDER_FILE)) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(_) => return Err(StorageError::Io),
        };
        let order = serde_json::from_slice(&raw).map_err(|_| StorageError::Corrupt)?;
        Ok(Some(order))
    }

    async fn clear_pending_order(&self) -> Result<(), StorageError> {
        Self::remove_if_present(&self.path(PENDING_ORDER_FILE))
    }

    async fn order_created_flag(&self) -> Result<bool, StorageError> {
        Ok(self.path(ORDER_CREATED_FILE).exists())
    }

    async fn set_order_created_flag(&self) -> Result<(), StorageError> {
        self.ensure_dir()?;
        fs::write(self.path(ORDER_CREATED_FILE), b"true").map_err(|_| StorageError::Io)
    }

    async fn clear_order_created_flag(&self) -> Result<(), StorageError> {
        Self::remove_if_present(&self.path(ORDER_CREATED_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::totals::CartTotals;
    use business::domain::checkout::model::{DeliveryInfo, PaymentMethod};
    use rust_decimal::Decimal;

    fn pending() -> PendingOrder {
        PendingOrder {
            items: vec![],
            delivery: DeliveryInfo {
                full_name: "Ada Lovelace".to_string(),
                phone: "0123456789".to_string(),
                address: "12 Market Street".to_string(),
                city: "Springfield".to_string(),
                note: Some("Ring twice".to_string()),
            },
            payment_method: PaymentMethod::Electronic,
            coupon_code: Some("SAVE10".to_string()),
            totals: CartTotals::compute(Decimal::from(80), None),
        }
    }

    #[tokio::test]
    async fn should_round_trip_pending_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        store.save_pending_order(&pending()).await.unwrap();
        let loaded = store.load_pending_order().await.unwrap().unwrap();

        assert_eq!(loaded, pending());
    }

    #[tokio::test]
    async fn should_load_none_when_nothing_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        assert!(store.load_pending_order().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_clear_pending_order_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        store.save_pending_order(&pending()).await.unwrap();

        store.clear_pending_order().await.unwrap();

        assert!(store.load_pending_order().await.unwrap().is_none());
        // Clearing twice is not an error.
        store.clear_pending_order().await.unwrap();
    }

    #[tokio::test]
    async fn should_cycle_order_created_flag() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        assert!(!store.order_created_flag().await.unwrap());
        store.set_order_created_flag().await.unwrap();
        assert!(store.order_created_flag().await.unwrap());
        store.clear_order_created_flag().await.unwrap();
        assert!(!store.order_created_flag().await.unwrap());
    }

    #[tokio::test]
    async fn should_report_corrupt_pending_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(PENDING_ORDER_FILE), b"{not json").unwrap();
        let store = FileSessionStore::new(dir.path());

        let result = store.load_pending_order().await;

        assert!(matches!(result.unwrap_err(), StorageError::Corrupt));
    }
}
