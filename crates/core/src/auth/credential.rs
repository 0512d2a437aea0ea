//! Credential and authentication status types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An access token with its absolute expiry instant.
///
/// An expired credential is equivalent to an absent one: every reader must
/// compare `expires_at` against "now" before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential expiring `expires_in` seconds from now.
    #[must_use]
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self { access_token, expires_at: Utc::now() + Duration::seconds(expires_in) }
    }

    /// Whether the token has reached its expiry instant.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry check against an explicit instant; `expires_at <= now` counts
    /// as expired.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Seconds until expiry; negative once expired.
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds()
    }
}

/// Authentication status owned by the auth state machine.
///
/// All other components observe this read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Source of truth is still being resolved (initial state on mount).
    #[default]
    Pending,
    Unauthenticated,
    Authenticated(Credential),
}

impl AuthStatus {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The credential, when authenticated.
    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Authenticated(credential) => Some(credential),
            _ => None,
        }
    }
}
