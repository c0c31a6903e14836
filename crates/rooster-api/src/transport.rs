// Shared transport configuration for building the backend's reqwest::Client.
//
// Base URL, the single request timeout, and the fixed JSON headers live
// here so they can be swapped without touching any store logic.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

/// Default backend root used during local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

const JSON: &str = "application/json";

/// Transport configuration for the HTTP backend.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TransportConfig {
    /// Parse a base URL string into a transport config with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, crate::error::Error> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The fixed JSON content headers sent with every request.
    pub fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("rooster/", env!("CARGO_PKG_VERSION")))
            .default_headers(Self::default_headers())
            .build()
            .map_err(crate::error::Error::Transport)
    }

    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}
