//! Callback fragment parsing
//!
//! After the provider redirects back, the URL fragment carries
//! `access_token`, `expires_in`, `state` and `token_type`. The fragment
//! never reaches a server, so whoever captures it hands the raw string to
//! [`complete_authentication`]. The caller must strip the fragment from the
//! visible address after a successful parse so the token does not leak via
//! history or referrer.

use std::collections::HashMap;

use tracing::{debug, error, info};
use tunescope_domain::constants::DEFAULT_EXPIRES_IN_SECS;
use tunescope_domain::errors::StoreResult;

use super::credential::Credential;
use super::store::CredentialStore;

/// Split a redirect fragment into percent-decoded `key=value` pairs.
///
/// A leading `#` is tolerated. Pairs without a value and undecodable values
/// are kept verbatim rather than dropped.
#[must_use]
pub fn parse_fragment(fragment: &str) -> HashMap<String, String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            (key.to_string(), decoded)
        })
        .collect()
}

/// Validate a redirect fragment and mint the credential it carries.
///
/// Returns `None` when the fragment holds no `access_token`, or when the
/// echoed `state` does not match the stored anti-forgery value byte for
/// byte. The mismatch case is a security-critical rejection and is logged
/// at error level; the stored state is left in place so the legitimate
/// callback can still complete.
///
/// On success the stored state is deleted (single use), the expiry is
/// computed as `now + expires_in` (default 3600 seconds when absent or
/// unparseable) and the credential is written to the store.
///
/// # Errors
/// Returns an error only when the store itself fails; an invalid fragment
/// is `Ok(None)`.
pub async fn complete_authentication<S: CredentialStore>(
    store: &S,
    fragment: &str,
) -> StoreResult<Option<Credential>> {
    let params = parse_fragment(fragment);

    let Some(access_token) = params.get("access_token") else {
        debug!("Callback fragment carries no access_token");
        return Ok(None);
    };

    let echoed_state = params.get("state").map(String::as_str);
    let stored_state = store.load_handshake_state().await?;

    if stored_state.as_deref() != echoed_state || stored_state.is_none() {
        error!(
            echoed = echoed_state.unwrap_or("<missing>"),
            "Anti-forgery state mismatch in auth callback, rejecting handshake"
        );
        return Ok(None);
    }

    // Single use: the state never validates a second callback.
    store.clear_handshake_state().await?;

    let expires_in = params
        .get("expires_in")
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_EXPIRES_IN_SECS);

    let credential = Credential::new(access_token.clone(), expires_in);
    store.save_credential(&credential).await?;

    info!(expires_in, "Authentication handshake completed");

    Ok(Some(credential))
}
