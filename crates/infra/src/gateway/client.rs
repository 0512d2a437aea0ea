//! HTTP gateway client
//!
//! Carries the request pipeline every endpoint goes through: credential
//! check, header attachment, dispatch, and status-to-error mapping.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use tunescope_core::{Credential, CredentialStore};
use tunescope_domain::ApiError;

use crate::config::GatewayConfig;

/// Authenticated gateway to the backing service API.
///
/// Holds the same credential store the auth session uses, so an eviction
/// here is visible to the session on its next resolution. Cheap to clone;
/// the underlying HTTP client is shared.
pub struct Gateway<S: CredentialStore> {
    http: reqwest::Client,
    config: GatewayConfig,
    store: Arc<S>,
}

impl<S: CredentialStore> Clone for Gateway<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CredentialStore> Gateway<S> {
    /// Create a gateway over the given store.
    ///
    /// # Errors
    /// Returns `NetworkFailure` if the HTTP client cannot be constructed.
    pub fn new(config: GatewayConfig, store: Arc<S>) -> Result<Self, ApiError> {
        // The local backend keeps a session cookie alongside the bearer
        // token; carry it across requests.
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::NetworkFailure(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config, store })
    }

    /// The shared credential store.
    #[must_use]
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Execute a GET request against an API path.
    ///
    /// # Errors
    /// Returns `Unauthorized` without any network I/O when no valid
    /// credential is stored, or the mapped error for any failure after
    /// dispatch.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        debug!(url = %url, "GET request");

        let credential = self.require_credential().await?;
        let request = self.authenticated(Method::GET, &url, &credential);
        let response = self.dispatch(request, &url).await?;
        let result = self.decode(response, &url).await?;

        info!(path = %path, "GET request successful");
        Ok(result)
    }

    /// Execute a POST request with a JSON body.
    ///
    /// # Errors
    /// Same taxonomy as [`Gateway::get`].
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let url = self.config.endpoint(path);
        debug!(url = %url, "POST request");

        let credential = self.require_credential().await?;
        let request = self.authenticated(Method::POST, &url, &credential).json(body);
        let response = self.dispatch(request, &url).await?;
        let result = self.decode(response, &url).await?;

        info!(path = %path, "POST request successful");
        Ok(result)
    }

    /// Execute a request with an arbitrary method and optional JSON body,
    /// returning the loosely-typed response.
    ///
    /// Escape hatch for endpoints without a typed wrapper; the typed
    /// methods are preferred everywhere a response shape is known.
    ///
    /// # Errors
    /// Same taxonomy as [`Gateway::get`].
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.config.endpoint(path);
        debug!(url = %url, "Request");

        let credential = self.require_credential().await?;
        let mut request = self.authenticated(method, &url, &credential);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.dispatch(request, &url).await?;
        self.decode(response, &url).await
    }

    /// Load the stored credential, evicting it first when expired.
    ///
    /// Runs before any connection is opened so an absent or expired
    /// credential never reaches the network.
    async fn require_credential(&self) -> Result<Credential, ApiError> {
        match self.store.load_credential().await? {
            Some(credential) if credential.is_expired() => {
                warn!("Stored credential expired, evicting before request");
                self.store.clear_credential().await?;
                Err(ApiError::Unauthorized("credential expired".to_string()))
            }
            Some(credential) => Ok(credential),
            None => Err(ApiError::Unauthorized("no credential stored".to_string())),
        }
    }

    /// Headers are fixed here; callers cannot override them.
    fn authenticated(&self, method: Method, url: &str, credential: &Credential) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", credential.access_token))
            .header("Content-Type", "application/json")
    }

    /// Send the request exactly once. No retries, no layer timeout.
    async fn dispatch(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Transport failure");
            ApiError::NetworkFailure(e.to_string())
        })
    }

    /// Map the response status, then deserialize a successful body.
    async fn decode<T: DeserializeOwned>(
        &self,
        response: Response,
        url: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.map_status_error(status, url, body).await);
        }

        response.json().await.map_err(|e| {
            warn!(url = %url, error = %e, "Response body did not match expected shape");
            ApiError::MalformedResponse(e.to_string())
        })
    }

    /// Probe backend reachability.
    ///
    /// The health endpoint is unauthenticated, so this skips the credential
    /// check entirely. A reachable but unhealthy backend reports `false`;
    /// only transport failures surface as errors.
    ///
    /// # Errors
    /// Returns `NetworkFailure` when the backend cannot be reached.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let url = self.config.endpoint("health");
        debug!(url = %url, "Health check");

        let response = self.dispatch(self.http.get(&url), &url).await?;
        if response.status().is_success() {
            info!("Backend is healthy");
            Ok(true)
        } else {
            warn!(status = %response.status(), "Backend returned non-success status");
            Ok(false)
        }
    }

    /// Map a non-success status into the error taxonomy.
    ///
    /// A 401 additionally evicts the stored credential: the token was
    /// presented and rejected, so keeping it would only repeat the failure.
    async fn map_status_error(&self, status: StatusCode, url: &str, body: String) -> ApiError {
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("{url} returned status {status}"));

        match status {
            StatusCode::UNAUTHORIZED => {
                warn!(url = %url, "Credential rejected, evicting");
                if let Err(e) = self.store.clear_credential().await {
                    warn!(error = %e, "Failed to evict rejected credential");
                }
                ApiError::Unauthorized(message)
            }
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(message),
            _ => ApiError::ServerError(message),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Prefers the JSON `message` field, then `error`, then the raw text.
/// Returns `None` for an empty body so the caller can fall back to a
/// status-line description.
fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
    }

    Some(body.to_string())
}
