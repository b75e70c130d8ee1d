use std::env;
use std::time::Duration;

const DEFAULT_POLL_SECS: u64 = 30;

/// Notification polling cadence for the watch view.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub poll_period: Duration,
}

impl SyncConfig {
    /// Environment variables:
    /// - STORE_NOTIFY_POLL_SECS: poll interval in seconds (default: 30)
    pub fn from_env() -> Self {
        let secs = env::var("STORE_NOTIFY_POLL_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_POLL_SECS);
        Self {
            poll_period: Duration::from_secs(secs),
        }
    }
}
