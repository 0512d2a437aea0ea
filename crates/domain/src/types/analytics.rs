//! Analytics summary types
//!
//! Produced by the aggregators in `tunescope-core`; recomputed on every
//! fresh fetch, never persisted.

use serde::{Deserialize, Serialize};

/// One entry of a genre frequency summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub name: String,
    pub count: u64,
}

/// One band of the popularity histogram.
///
/// Labels come from a fixed set, so this only serializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularityBucket {
    /// Display label, e.g. `"21-40"`.
    pub range: &'static str,
    pub count: u64,
}
