//! Gateway configuration
//!
//! Loads gateway settings from environment variables with sensible
//! defaults for local development.
//!
//! ## Environment Variables
//! - `TUNESCOPE_API_BASE_URL`: Base URL of the backing service API
//!   (default `http://localhost:5000/api`)

use tracing::debug;

/// Default base URL for local development against the bundled backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for the request gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL every request path is joined onto.
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl GatewayConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Load configuration from the environment, falling back to defaults
    /// for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = match std::env::var("TUNESCOPE_API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                debug!("TUNESCOPE_API_BASE_URL unset, using default");
                DEFAULT_BASE_URL.to_string()
            }
        };
        Self { base_url }
    }

    /// Join a request path onto the base URL with exactly one separating
    /// slash, whatever combination of trailing and leading slashes the two
    /// sides carry.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
