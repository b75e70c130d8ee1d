use reqwest::Client;

/// Shared storefront backend HTTP client configuration. Every request
/// carries the bearer credential from configuration.
pub struct ApiClient {
    pub client: Client,
    base_url: String,
    bearer_token: String,
}

impl ApiClient {
    pub fn new(base_url: String, bearer_token: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url,
            bearer_token,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }

    /// Joins an absolute endpoint path onto the configured base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
