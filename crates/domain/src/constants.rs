//! Shared constants for the auth handshake and analytics.

/// Token lifetime assumed when the callback omits `expires_in`.
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Length of the generated anti-forgery state token.
pub const STATE_TOKEN_LENGTH: usize = 16;

/// Number of entries kept in a genre summary.
pub const GENRE_TOP_N: usize = 5;

/// Width of each popularity histogram band.
pub const POPULARITY_BUCKET_WIDTH: u32 = 20;

/// Number of popularity histogram bands covering 0-100.
pub const POPULARITY_BUCKET_COUNT: usize = 5;

/// Default item count requested from paginated endpoints.
pub const DEFAULT_FETCH_LIMIT: u32 = 20;

/// Scopes requested during authorization, space-joined into the authorize URL.
pub const SCOPES: &[&str] = &[
    "user-read-private",
    "user-read-email",
    "user-top-read",
    "user-read-recently-played",
    "user-library-read",
    "playlist-read-private",
    "playlist-read-collaborative",
    "playlist-modify-public",
    "playlist-modify-private",
];
