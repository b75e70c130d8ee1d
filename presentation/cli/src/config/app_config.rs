use super::backend_config::BackendConfig;
use super::session_config::SessionConfig;
use super::sync_config::SyncConfig;

pub struct AppConfig {
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub sync: SyncConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend: BackendConfig::from_env(),
            session: SessionConfig::from_env(),
            sync: SyncConfig::from_env(),
        }
    }
}
