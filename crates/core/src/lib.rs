//! # Tunescope Core
//!
//! Pure auth lifecycle logic and analytics - no infrastructure dependencies.
//!
//! This crate contains:
//! - The credential model and the credential store port (trait)
//! - Authorization URL building with anti-forgery state
//! - Callback fragment parsing and validation
//! - The auth state machine publishing `AuthStatus` to subscribers
//! - Pure aggregators for genre and popularity summaries
//!
//! ## Architecture Principles
//! - Only depends on `tunescope-domain`
//! - No HTTP or platform code; persistence via the `CredentialStore` trait
//! - The state machine never issues network calls itself

pub mod analytics;
pub mod auth;

pub use analytics::{bucket_popularity, summarize_genres};
pub use auth::authorize::{build_authorization_url, AuthConfig};
pub use auth::callback::complete_authentication;
pub use auth::credential::{AuthStatus, Credential};
pub use auth::session::AuthSession;
pub use auth::store::{CredentialStore, MemoryStore};
