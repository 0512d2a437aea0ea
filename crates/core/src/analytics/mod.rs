//! Derived-data aggregators
//!
//! Pure transformations from raw API item lists to presentation summaries.
//! Recomputed on every fresh fetch; nothing here is persisted.

pub mod genres;
pub mod popularity;

pub use genres::summarize_genres;
pub use popularity::bucket_popularity;
