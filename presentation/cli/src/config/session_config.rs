use std::env;
use std::path::PathBuf;

/// Where session-persistent state (pending order, idempotency flag) lives.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub dir: PathBuf,
}

impl SessionConfig {
    /// Environment variables:
    /// - STORE_SESSION_DIR: session state directory (default: ".storefront")
    pub fn from_env() -> Self {
        let dir = env::var("STORE_SESSION_DIR").unwrap_or_else(|_| ".storefront".to_string());
        Self { dir: dir.into() }
    }
}
