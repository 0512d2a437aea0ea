//! Auth state machine
//!
//! One `AuthSession` instance owns the authentication status for the whole
//! application; consumers subscribe to status changes instead of re-deriving
//! them ad hoc. Resolution reads and writes the credential store only, never
//! the network, so it is idempotent and safe to call repeatedly.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};
use tunescope_domain::errors::StoreResult;

use super::authorize::{build_authorization_url, AuthConfig};
use super::callback::complete_authentication;
use super::credential::AuthStatus;
use super::store::CredentialStore;

/// Orchestrates the authentication lifecycle.
///
/// States: `Unauthenticated -> Pending -> Authenticated`, and back to
/// `Unauthenticated` on logout or credential rejection. A new session starts
/// in `Pending` until [`AuthSession::resolve`] decides the source of truth.
pub struct AuthSession<S: CredentialStore> {
    config: AuthConfig,
    store: Arc<S>,
    status_tx: watch::Sender<AuthStatus>,
}

impl<S: CredentialStore> AuthSession<S> {
    /// Create a session in the `Pending` state.
    #[must_use]
    pub fn new(config: AuthConfig, store: Arc<S>) -> Self {
        let (status_tx, _) = watch::channel(AuthStatus::Pending);
        Self { config, store, status_tx }
    }

    /// Current status snapshot.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.status_tx.borrow().clone()
    }

    /// Subscribe to status changes.
    ///
    /// The receiver immediately sees the current status and is notified on
    /// every transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status_tx.subscribe()
    }

    /// The injected credential store, shared with the request gateway.
    #[must_use]
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Decide the source of truth and publish the resulting status.
    ///
    /// Pass the redirect fragment when the current navigation is the
    /// callback destination; otherwise the stored credential decides:
    /// absent or expired (evicted lazily) means `Unauthenticated`.
    ///
    /// Called once at application start and again on every navigation to
    /// the callback destination. Performs no network I/O.
    ///
    /// # Errors
    /// Returns an error only when the store fails; authentication failures
    /// resolve to `Unauthenticated`, never an error.
    pub async fn resolve(&self, callback_fragment: Option<&str>) -> StoreResult<AuthStatus> {
        let status = match callback_fragment {
            Some(fragment) if !fragment.trim_start_matches('#').is_empty() => {
                match complete_authentication(self.store.as_ref(), fragment).await? {
                    Some(credential) => AuthStatus::Authenticated(credential),
                    // Caller should redirect away from the callback
                    // destination after this.
                    None => AuthStatus::Unauthenticated,
                }
            }
            _ => self.resolve_from_store().await?,
        };

        self.publish(status.clone());
        Ok(status)
    }

    async fn resolve_from_store(&self) -> StoreResult<AuthStatus> {
        match self.store.load_credential().await? {
            None => Ok(AuthStatus::Unauthenticated),
            Some(credential) if credential.is_expired() => {
                warn!("Stored credential expired, evicting");
                self.store.clear_credential().await?;
                Ok(AuthStatus::Unauthenticated)
            }
            Some(credential) => {
                debug!("Stored credential still valid");
                Ok(AuthStatus::Authenticated(credential))
            }
        }
    }

    /// Start a login: returns the authorization URL with a fresh
    /// anti-forgery state.
    ///
    /// The caller navigates the browsing context there (full-page redirect,
    /// not a fetch).
    ///
    /// # Errors
    /// Returns an error if the anti-forgery state cannot be stored.
    pub async fn begin_login(&self) -> StoreResult<String> {
        let url = build_authorization_url(&self.config, self.store.as_ref()).await?;
        info!("Login started");
        Ok(url)
    }

    /// Log out locally: evict the credential and any pending handshake
    /// state, then publish `Unauthenticated` immediately.
    ///
    /// The implicit grant offers no remote revocation, so this is a local
    /// operation only.
    ///
    /// # Errors
    /// Returns an error if the store cannot be cleared.
    pub async fn logout(&self) -> StoreResult<()> {
        self.store.clear_credential().await?;
        self.store.clear_handshake_state().await?;
        self.publish(AuthStatus::Unauthenticated);
        info!("Logged out");
        Ok(())
    }

    fn publish(&self, status: AuthStatus) {
        // send_replace never fails even with no subscribers.
        self.status_tx.send_replace(status);
    }
}
