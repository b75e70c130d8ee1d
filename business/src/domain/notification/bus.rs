use tokio::sync::broadcast;

/// Payload-free invalidation signal shared by everything that shows
/// notification state. Publishing means "notifications may have changed";
/// subscribers re-fetch their own state in response. No ordering is
/// guaranteed between this path and the hub's polling path; whichever
/// refresh completes last wins.
#[derive(Debug, Clone)]
pub struct InvalidationBus {
    sender: broadcast::Sender<()>,
}

impl InvalidationBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(16);
        Self { sender }
    }

    /// Fire-and-forget; publishing with no live subscribers is not an error.
    pub fn publish(&self) {
        let _ = self.sender.send(());
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.sender.subscribe()
    }
}

impl Default for InvalidationBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_deliver_signal_to_every_subscriber() {
        let bus = InvalidationBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish();

        assert!(first.try_recv().is_ok());
        assert!(second.try_recv().is_ok());
    }

    #[test]
    fn should_not_fail_without_subscribers() {
        let bus = InvalidationBus::new();
        bus.publish();
    }
}
