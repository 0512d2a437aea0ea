//! Authenticated request gateway
//!
//! Single choke point for every call to the backing service API. The
//! gateway attaches the stored credential, maps every failure into one
//! `ApiError` variant, and evicts the credential on rejection so the auth
//! state machine observes the logout on its next resolution.
//!
//! Deliberately absent: automatic retries, request timeouts and response
//! caching. A failed request surfaces immediately and retrying is the
//! caller's decision.

pub mod client;
pub mod endpoints;

pub use client::Gateway;
