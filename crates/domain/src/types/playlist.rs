//! Playlist types
//!
//! Covers the user's playlist listing plus the request/response contract of
//! the backend's prompt-based playlist generation endpoint
//! (`POST playlists/generate`).

use serde::{Deserialize, Serialize};

use super::Image;

/// A playlist from `GET me/playlists`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub tracks: Option<PlaylistTracksRef>,
    pub public: Option<bool>,
}

/// Track-count reference embedded in a playlist listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

/// Body for `POST playlists/generate`.
///
/// `source_playlist_id` may be the sentinel `"liked_songs"` to draw from the
/// user's saved tracks instead of a playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlaylistRequest {
    pub source_playlist_id: String,
    pub prompt: String,
}

impl GeneratePlaylistRequest {
    /// Sentinel source id selecting the user's liked songs.
    pub const LIKED_SONGS: &'static str = "liked_songs";

    #[must_use]
    pub fn new(source_playlist_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self { source_playlist_id: source_playlist_id.into(), prompt: prompt.into() }
    }

    /// Build a request drawing from the user's liked songs.
    #[must_use]
    pub fn from_liked_songs(prompt: impl Into<String>) -> Self {
        Self::new(Self::LIKED_SONGS, prompt)
    }
}

/// Response from `POST playlists/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlaylist {
    pub status: String,
    pub playlist: GeneratedPlaylistSummary,
}

/// Summary of the playlist the backend created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlaylistSummary {
    pub id: String,
    pub name: String,
    /// Number of tracks the backend selected.
    pub tracks: u64,
    pub prompt: Option<String>,
}
