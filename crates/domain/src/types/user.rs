//! User profile types
//!
//! Profile returned by `GET me`, proxied from the music service.

use serde::{Deserialize, Serialize};

use super::Image;

/// The authenticated user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub product: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub followers: Option<Followers>,
}

/// Follower count wrapper as the service returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_profile() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"user1","display_name":"Ada"}"#).unwrap();
        assert_eq!(profile.id, "user1");
        assert_eq!(profile.display_name.as_deref(), Some("Ada"));
        assert!(profile.images.is_empty());
        assert!(profile.followers.is_none());
    }
}
