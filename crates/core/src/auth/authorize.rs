//! Authorization URL building
//!
//! Builds the redirect target for the provider's authorize endpoint,
//! embedding a freshly generated anti-forgery state token. The only side
//! effect is writing that state to the credential store; it is regenerated
//! on every invocation so a prior value can never be replayed.

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::debug;
use tunescope_domain::constants::{SCOPES, STATE_TOKEN_LENGTH};
use tunescope_domain::errors::StoreResult;

use super::store::CredentialStore;

/// Configuration for the authorization handshake.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Provider authorize endpoint, e.g. `https://accounts.spotify.com/authorize`.
    pub authorize_endpoint: String,
    pub client_id: String,
    /// Redirect target registered with the provider.
    pub redirect_uri: String,
    /// Scopes to request, space-joined into the URL.
    pub scopes: Vec<String>,
}

impl AuthConfig {
    /// Create a configuration with the default scope list.
    #[must_use]
    pub fn new(
        authorize_endpoint: impl Into<String>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            authorize_endpoint: authorize_endpoint.into(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            scopes: SCOPES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Replace the requested scopes.
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Scopes as the space-separated string sent to the provider.
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

/// Generate a random alphanumeric anti-forgery token.
fn generate_state_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Build the authorization URL for a browser-based login.
///
/// Stores the generated anti-forgery state before returning; the caller is
/// responsible for navigating the browsing context to the URL (full-page
/// redirect, not a fetch).
///
/// # Errors
/// Returns an error if the state cannot be written to the store.
pub async fn build_authorization_url<S: CredentialStore>(
    config: &AuthConfig,
    store: &S,
) -> StoreResult<String> {
    let state = generate_state_token();
    store.save_handshake_state(&state).await?;

    let params = [
        ("client_id", config.client_id.as_str()),
        ("response_type", "token"),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("state", state.as_str()),
    ];

    let scope_string = config.scope_string();
    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .chain(std::iter::once(format!("scope={}", urlencoding::encode(&scope_string))))
        .collect::<Vec<_>>()
        .join("&");

    debug!("Built authorization URL with fresh anti-forgery state");

    Ok(format!("{}?{}", config.authorize_endpoint, query))
}
