//! # Tunescope Domain
//!
//! Shared types for the Tunescope client - no infrastructure dependencies.
//!
//! This crate contains:
//! - API response models (profile, tracks, artists, playlists)
//! - The error taxonomy produced by the request gateway
//! - Analytics summary types and shared constants

pub mod constants;
pub mod errors;
pub mod types;

pub use errors::{ApiError, StoreError};
pub use types::analytics::{GenreCount, PopularityBucket};
pub use types::artist::Artist;
pub use types::paging::Page;
pub use types::playlist::{GeneratePlaylistRequest, GeneratedPlaylist, Playlist};
pub use types::track::{PlayHistoryItem, SavedTrack, Track};
pub use types::user::UserProfile;
pub use types::TimeRange;
