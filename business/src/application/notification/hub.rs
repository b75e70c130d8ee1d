use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::domain::logger::Logger;
use crate::domain::notification::bus::InvalidationBus;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::gateway::NotificationGateway;
use crate::domain::notification::model::Notification;

/// How many recent notifications the hub keeps for the bell/menu views.
const RECENT_LIMIT: u32 = 10;

/// What every notification view renders from.
#[derive(Debug, Clone, Default)]
pub struct InboxSnapshot {
    pub recent: Vec<Notification>,
    pub unread_count: u64,
}

/// Shared notification state for the whole session.
///
/// Two redundant propagation paths keep views in sync: the invalidation
/// bus (mutations publish, the hub re-fetches on receipt) and an
/// independent fixed-interval poll. Both are best-effort re-fetches that
/// replace the snapshot wholesale; whichever lands last wins.
pub struct NotificationHub {
    gateway: Arc<dyn NotificationGateway>,
    logger: Arc<dyn Logger>,
    bus: InvalidationBus,
    state: RwLock<InboxSnapshot>,
}

/// Background tasks owned by the session. Dropping the guard aborts them,
/// so teardown cannot leak a timer.
pub struct HubTasks {
    poller: JoinHandle<()>,
    listener: JoinHandle<()>,
}

impl Drop for HubTasks {
    fn drop(&mut self) {
        self.poller.abort();
        self.listener.abort();
    }
}

impl NotificationHub {
    pub fn new(
        gateway: Arc<dyn NotificationGateway>,
        logger: Arc<dyn Logger>,
        bus: InvalidationBus,
    ) -> Self {
        Self {
            gateway,
            logger,
            bus,
            state: RwLock::new(InboxSnapshot::default()),
        }
    }

    pub fn bus(&self) -> &InvalidationBus {
        &self.bus
    }

    pub async fn snapshot(&self) -> InboxSnapshot {
        self.state.read().await.clone()
    }

    /// Re-fetches and replaces the snapshot in place. A failed fetch
    /// leaves the previous snapshot standing.
    pub async fn refresh(&self) -> Result<(), NotificationError> {
        let recent = self.gateway.recent(RECENT_LIMIT).await?;
        let unread_count = self.gateway.unread_count().await?;
        *self.state.write().await = InboxSnapshot {
            recent,
            unread_count,
        };
        Ok(())
    }

    pub async fn mark_as_read(&self, id: &str) -> Result<(), NotificationError> {
        self.gateway.mark_as_read(id).await?;
        self.refresh().await?;
        self.bus.publish();
        Ok(())
    }

    pub async fn mark_all_as_read(&self) -> Result<(), NotificationError> {
        self.gateway.mark_all_as_read().await?;
        self.refresh().await?;
        self.bus.publish();
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), NotificationError> {
        self.gateway.delete(id).await?;
        self.refresh().await?;
        self.bus.publish();
        Ok(())
    }

    /// Starts the poll loop and the bus listener. Poll failures are
    /// logged and retried on the next tick.
    pub fn spawn_background(self: &Arc<Self>, poll_period: Duration) -> HubTasks {
        let poll_hub = Arc::clone(self);
        let poller = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_period);
            loop {
                ticker.tick().await;
                if poll_hub.refresh().await.is_err() {
                    poll_hub.logger.warn("Notification poll failed, keeping stale snapshot");
                }
            }
        });

        let listen_hub = Arc::clone(self);
        let mut signals = self.bus.subscribe();
        let listener = tokio::spawn(async move {
            while signals.recv().await.is_ok() {
                if listen_hub.refresh().await.is_err() {
                    listen_hub
                        .logger
                        .warn("Invalidation refresh failed, keeping stale snapshot");
                }
            }
        });

        HubTasks { poller, listener }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::cart::add_item::tests::NullLogger;
    use crate::domain::errors::GatewayError;
    use crate::domain::notification::gateway::NotificationPage;
    use crate::domain::notification::model::NotificationKind;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use std::sync::atomic::{AtomicU64, Ordering};

    mock! {
        pub Notifications {}

        #[async_trait]
        impl NotificationGateway for Notifications {
            async fn list(&self, page: u32, page_size: u32) -> Result<NotificationPage, GatewayError>;
            async fn recent(&self, limit: u32) -> Result<Vec<Notification>, GatewayError>;
            async fn unread_count(&self) -> Result<u64, GatewayError>;
            async fn mark_as_read(&self, id: &str) -> Result<(), GatewayError>;
            async fn mark_all_as_read(&self) -> Result<(), GatewayError>;
            async fn delete(&self, id: &str) -> Result<(), GatewayError>;
        }
    }

    pub(crate) fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            user_id: "u1".to_string(),
            message: "Your order is on its way".to_string(),
            kind: NotificationKind::Order,
            read,
            created_at: Utc::now(),
            additional_data: None,
        }
    }

    fn hub(gateway: MockNotifications) -> Arc<NotificationHub> {
        Arc::new(NotificationHub::new(
            Arc::new(gateway),
            Arc::new(NullLogger),
            InvalidationBus::new(),
        ))
    }

    #[tokio::test]
    async fn should_replace_snapshot_wholesale_on_refresh() {
        let calls = Arc::new(AtomicU64::new(0));
        let seen = calls.clone();
        let mut gateway = MockNotifications::new();
        gateway.expect_recent().returning(move |_| {
            if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(vec![notification("n1", false), notification("n2", false)])
            } else {
                Ok(vec![notification("n3", true)])
            }
        });
        gateway.expect_unread_count().returning(|| Ok(1));
        let hub = hub(gateway);

        hub.refresh().await.unwrap();
        assert_eq!(hub.snapshot().await.recent.len(), 2);

        hub.refresh().await.unwrap();
        let snapshot = hub.snapshot().await;
        assert_eq!(snapshot.recent.len(), 1);
        assert_eq!(snapshot.recent[0].id, "n3");
    }

    #[tokio::test]
    async fn should_keep_stale_snapshot_when_refresh_fails() {
        let calls = Arc::new(AtomicU64::new(0));
        let seen = calls.clone();
        let mut gateway = MockNotifications::new();
        gateway.expect_recent().returning(move |_| {
            if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(vec![notification("n1", false)])
            } else {
                Err(GatewayError::Network)
            }
        });
        gateway.expect_unread_count().returning(|| Ok(1));
        let hub = hub(gateway);

        hub.refresh().await.unwrap();
        let result = hub.refresh().await;

        assert!(result.is_err());
        assert_eq!(hub.snapshot().await.recent.len(), 1);
    }

    #[tokio::test]
    async fn should_refresh_and_publish_after_mark_as_read() {
        let mut gateway = MockNotifications::new();
        gateway
            .expect_mark_as_read()
            .times(1)
            .returning(|_| Ok(()));
        gateway
            .expect_recent()
            .returning(|_| Ok(vec![notification("n1", true)]));
        gateway.expect_unread_count().returning(|| Ok(0));
        let hub = hub(gateway);
        let mut signals = hub.bus().subscribe();

        hub.mark_as_read("n1").await.unwrap();

        assert_eq!(hub.snapshot().await.unread_count, 0);
        assert!(signals.try_recv().is_ok());
    }

    #[tokio::test]
    async fn should_refresh_on_bus_invalidation() {
        let mut gateway = MockNotifications::new();
        gateway
            .expect_recent()
            .returning(|_| Ok(vec![notification("n1", false)]));
        gateway.expect_unread_count().returning(|| Ok(1));
        let hub = hub(gateway);
        let _tasks = hub.spawn_background(Duration::from_secs(3600));

        hub.bus().publish();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(hub.snapshot().await.unread_count, 1);
    }

    #[tokio::test]
    async fn should_poll_on_the_configured_interval() {
        let mut gateway = MockNotifications::new();
        gateway
            .expect_recent()
            .returning(|_| Ok(vec![notification("n1", false)]));
        gateway.expect_unread_count().returning(|| Ok(7));
        let hub = hub(gateway);
        let _tasks = hub.spawn_background(Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(hub.snapshot().await.unread_count, 7);
    }
}
