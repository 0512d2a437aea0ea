//! File-backed credential store
//!
//! Persists the credential and transient handshake state as a small JSON
//! document with three string-valued entries. The expiry is stored as a
//! string-encoded epoch-milliseconds timestamp, matching the wire form of
//! the token lifetime math everywhere else.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use tunescope_core::{Credential, CredentialStore};
use tunescope_domain::errors::StoreResult;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    /// Epoch milliseconds, string-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    token_expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_state: Option<String>,
}

/// Credential store persisted to a JSON file.
///
/// Writes go through a mutex so concurrent mutations cannot interleave a
/// read-modify-write. A missing file reads as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    /// The file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> StoreResult<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_document(&self, document: &StoreDocument) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    async fn update<F>(&self, mutate: F) -> StoreResult<()>
    where
        F: FnOnce(&mut StoreDocument),
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document()?;
        mutate(&mut document);
        self.write_document(&document)
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn load_credential(&self) -> StoreResult<Option<Credential>> {
        let document = self.read_document()?;
        let (Some(access_token), Some(expiry)) = (document.access_token, document.token_expiry)
        else {
            return Ok(None);
        };

        // An unreadable expiry makes the credential unusable; report it as
        // absent rather than guessing a lifetime.
        let expires_at = expiry
            .parse::<i64>()
            .ok()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single());
        match expires_at {
            Some(expires_at) => Ok(Some(Credential { access_token, expires_at })),
            None => {
                warn!(expiry = %expiry, "Stored expiry is not a valid timestamp");
                Ok(None)
            }
        }
    }

    async fn save_credential(&self, credential: &Credential) -> StoreResult<()> {
        debug!(path = %self.path.display(), "Persisting credential");
        let access_token = credential.access_token.clone();
        let token_expiry = credential.expires_at.timestamp_millis().to_string();
        self.update(|doc| {
            doc.access_token = Some(access_token);
            doc.token_expiry = Some(token_expiry);
        })
        .await
    }

    async fn clear_credential(&self) -> StoreResult<()> {
        self.update(|doc| {
            doc.access_token = None;
            doc.token_expiry = None;
        })
        .await
    }

    async fn save_handshake_state(&self, state: &str) -> StoreResult<()> {
        let state = state.to_string();
        self.update(|doc| doc.auth_state = Some(state)).await
    }

    async fn load_handshake_state(&self) -> StoreResult<Option<String>> {
        Ok(self.read_document()?.auth_state)
    }

    async fn clear_handshake_state(&self) -> StoreResult<()> {
        self.update(|doc| doc.auth_state = None).await
    }
}
