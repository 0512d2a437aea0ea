//! Credential store port
//!
//! Abstracts the durable key-value persistence holding the current
//! credential and, transiently during the handshake, the anti-forgery state.
//! Injecting the store keeps the lifecycle logic testable and lets other
//! runtimes swap in their own backend (the file-backed implementation lives
//! in `tunescope-infra`).

use async_trait::async_trait;
use tokio::sync::Mutex;
use tunescope_domain::errors::StoreResult;

use super::credential::Credential;

/// Persistence port for the auth lifecycle.
///
/// Every mutation is idempotent: clearing an already-absent entry is a
/// no-op, which makes concurrent 401-triggered evictions safe.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the stored credential, if any. Does not check expiry.
    async fn load_credential(&self) -> StoreResult<Option<Credential>>;

    /// Persist the credential, replacing any previous one.
    async fn save_credential(&self, credential: &Credential) -> StoreResult<()>;

    /// Remove the stored credential. No-op when absent.
    async fn clear_credential(&self) -> StoreResult<()>;

    /// Persist the anti-forgery state for the in-flight handshake.
    async fn save_handshake_state(&self, state: &str) -> StoreResult<()>;

    /// Read the stored anti-forgery state without consuming it.
    async fn load_handshake_state(&self) -> StoreResult<Option<String>>;

    /// Remove the anti-forgery state. No-op when absent.
    async fn clear_handshake_state(&self) -> StoreResult<()>;
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    credential: Option<Credential>,
    handshake_state: Option<String>,
}

/// In-memory credential store.
///
/// Default backend for tests and short-lived sessions; state does not
/// survive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryStoreInner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn load_credential(&self) -> StoreResult<Option<Credential>> {
        Ok(self.inner.lock().await.credential.clone())
    }

    async fn save_credential(&self, credential: &Credential) -> StoreResult<()> {
        self.inner.lock().await.credential = Some(credential.clone());
        Ok(())
    }

    async fn clear_credential(&self) -> StoreResult<()> {
        self.inner.lock().await.credential = None;
        Ok(())
    }

    async fn save_handshake_state(&self, state: &str) -> StoreResult<()> {
        self.inner.lock().await.handshake_state = Some(state.to_string());
        Ok(())
    }

    async fn load_handshake_state(&self) -> StoreResult<Option<String>> {
        Ok(self.inner.lock().await.handshake_state.clone())
    }

    async fn clear_handshake_state(&self) -> StoreResult<()> {
        self.inner.lock().await.handshake_state = None;
        Ok(())
    }
}
