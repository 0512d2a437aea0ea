//! Typed endpoint surface
//!
//! One method per backend operation, all funneled through the gateway's
//! request pipeline. Paths are relative to the configured base URL.

use tracing::{info, instrument};
use tunescope_core::CredentialStore;
use tunescope_domain::constants::DEFAULT_FETCH_LIMIT;
use tunescope_domain::{
    ApiError, Artist, GeneratePlaylistRequest, GeneratedPlaylist, Page, PlayHistoryItem, Playlist,
    SavedTrack, TimeRange, Track, UserProfile,
};

use super::client::Gateway;

impl<S: CredentialStore> Gateway<S> {
    /// Fetch the authenticated user's profile.
    ///
    /// # Errors
    /// See [`Gateway::get`].
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get("me").await
    }

    /// Fetch the user's top tracks over a time range.
    ///
    /// # Errors
    /// See [`Gateway::get`].
    pub async fn top_tracks(
        &self,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Page<Track>, ApiError> {
        self.get(&format!("me/top/tracks?time_range={}&limit={limit}", time_range.as_str())).await
    }

    /// Fetch the user's top artists over a time range.
    ///
    /// # Errors
    /// See [`Gateway::get`].
    pub async fn top_artists(
        &self,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Page<Artist>, ApiError> {
        self.get(&format!("me/top/artists?time_range={}&limit={limit}", time_range.as_str())).await
    }

    /// Fetch the user's most recently played tracks.
    ///
    /// # Errors
    /// See [`Gateway::get`].
    pub async fn recently_played(&self, limit: u32) -> Result<Page<PlayHistoryItem>, ApiError> {
        self.get(&format!("me/player/recently-played?limit={limit}")).await
    }

    /// Fetch the user's playlists.
    ///
    /// # Errors
    /// See [`Gateway::get`].
    pub async fn playlists(&self) -> Result<Page<Playlist>, ApiError> {
        self.get(&format!("me/playlists?limit={DEFAULT_FETCH_LIMIT}")).await
    }

    /// Fetch a page of the user's saved tracks.
    ///
    /// # Errors
    /// See [`Gateway::get`].
    pub async fn saved_tracks(&self, limit: u32, offset: u32) -> Result<Page<SavedTrack>, ApiError> {
        self.get(&format!("me/tracks?limit={limit}&offset={offset}")).await
    }

    /// Ask the backend to generate a playlist from a prompt.
    ///
    /// Long-running on the backend side; the gateway still applies no
    /// timeout and waits for the response.
    ///
    /// # Errors
    /// See [`Gateway::post`].
    #[instrument(skip(self, request), fields(source = %request.source_playlist_id))]
    pub async fn generate_playlist(
        &self,
        request: &GeneratePlaylistRequest,
    ) -> Result<GeneratedPlaylist, ApiError> {
        let generated = self.post("playlists/generate", request).await?;
        info!("Playlist generated");
        Ok(generated)
    }
}
