use std::time::Duration;

/// Connection settings for the hosted backend.
///
/// Built by the host application at startup and handed to
/// [`crate::rest::RestClient::new`]. The key travels as both the `apikey`
/// header and the bearer token, which is how the gateway expects its
/// anonymous role key.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the deployment, e.g. "https://abc.supabase.co".
    pub base_url: String,
    /// Anonymous role API key.
    pub api_key: String,
    /// Per-request timeout. The backend itself imposes none, so a stuck
    /// request would otherwise hang a refresh forever.
    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
