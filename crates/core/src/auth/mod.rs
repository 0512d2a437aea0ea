//! OAuth 2.0 implicit-grant lifecycle
//!
//! The implicit grant returns the access token directly in the redirect
//! fragment; there is no code exchange and no refresh token. The modules
//! here cover the whole handshake:
//!
//! ```text
//! ┌──────────────┐
//! │ AuthSession  │  State machine, publishes AuthStatus
//! └──────┬───────┘
//!        │
//!        ├──► authorize   (authorize URL + anti-forgery state)
//!        ├──► callback    (fragment parsing + CSRF validation)
//!        │
//!        └──► CredentialStore  (injected persistence port)
//! ```
//!
//! # Security
//!
//! The anti-forgery state token is the sole CSRF defense of the handshake:
//! it is regenerated on every login attempt, compared byte-for-byte against
//! the value echoed by the provider, and deleted on first successful use.

pub mod authorize;
pub mod callback;
pub mod credential;
pub mod session;
pub mod store;

pub use authorize::{build_authorization_url, AuthConfig};
pub use callback::complete_authentication;
pub use credential::{AuthStatus, Credential};
pub use session::AuthSession;
pub use store::{CredentialStore, MemoryStore};
