use std::env;

/// REST backend endpoint and credential.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub bearer_token: String,
}

impl BackendConfig {
    /// Load backend configuration from environment variables
    ///
    /// Environment variables:
    /// - STORE_API_BASE_URL: backend base URL (default: "http://127.0.0.1:8080/api")
    /// - STORE_API_TOKEN: bearer credential attached to every request
    pub fn from_env() -> Self {
        let base_url = env::var("STORE_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/api".to_string());
        let bearer_token = env::var("STORE_API_TOKEN").unwrap_or_default();

        Self {
            base_url,
            bearer_token,
        }
    }
}
