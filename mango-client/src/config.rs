//! Client configuration

/// Admin client configuration.
///
/// # Environment variables
///
/// All fields can be populated from the environment via [`ClientConfig::from_env`]:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | API_BASE_URL | http://localhost:3001 | Ordering REST API host |
/// | ORDERING_BASE_URL | http://localhost:3002 | Customer ordering site, used for QR code targets |
/// | REQUEST_TIMEOUT_SECS | 30 | Request timeout in seconds |
///
/// The bearer token is never read from ambient storage; it is set explicitly
/// (usually via [`crate::HttpClient::authenticate`]) and travels with the
/// client it was given to.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Ordering API base URL
    pub api_base_url: String,

    /// Customer-facing ordering site base URL (QR code target)
    pub ordering_base_url: String,

    /// Bearer token for authenticated endpoints
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration with explicit hosts
    pub fn new(api_base_url: impl Into<String>, ordering_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ordering_base_url: ordering_base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3001".into()),
            ordering_base_url: std::env::var("ORDERING_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3002".into()),
            token: None,
            timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001", "http://localhost:3002")
    }
}
