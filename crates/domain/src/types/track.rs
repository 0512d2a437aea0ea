//! Track types
//!
//! Tracks appear in three wrappers: bare (top tracks), with a `played_at`
//! timestamp (recently played) and with an `added_at` timestamp (liked
//! songs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Image;

/// A single track as returned by the top-tracks endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub album: Option<Album>,
    pub duration_ms: Option<u64>,
    /// 0-100 score; absent for some catalog entries, treated as 0 by the
    /// popularity histogram.
    pub popularity: Option<u32>,
}

/// Artist reference embedded in a track (not the full artist object).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

/// Album reference embedded in a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Entry from `GET me/player/recently-played`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistoryItem {
    pub track: Track,
    pub played_at: DateTime<Utc>,
}

/// Entry from `GET me/tracks` (liked songs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub track: Track,
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_popularity_deserializes_as_none() {
        let track: Track = serde_json::from_str(
            r#"{"id":"t1","name":"Song","artists":[{"id":null,"name":"Band"}]}"#,
        )
        .unwrap();
        assert!(track.popularity.is_none());
        assert_eq!(track.artists[0].name, "Band");
    }

    #[test]
    fn play_history_parses_timestamp() {
        let item: PlayHistoryItem = serde_json::from_str(
            r#"{"track":{"id":"t1","name":"Song"},"played_at":"2024-05-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(item.track.id, "t1");
    }
}
