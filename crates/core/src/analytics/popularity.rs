//! Popularity histogram

use tunescope_domain::constants::{POPULARITY_BUCKET_COUNT, POPULARITY_BUCKET_WIDTH};
use tunescope_domain::types::analytics::PopularityBucket;
use tunescope_domain::Track;

const BUCKET_LABELS: [&str; POPULARITY_BUCKET_COUNT] =
    ["0-20", "21-40", "41-60", "61-80", "81-100"];

/// Bucket track popularity into five width-20 bands over 0-100.
///
/// Popularity is clamped to [0, 100] and missing values count as 0; the
/// bucket index is `min(popularity / 20, 4)`, so 20 lands in `21-40` and
/// 100 in `81-100`.
#[must_use]
pub fn bucket_popularity(tracks: &[Track]) -> Vec<PopularityBucket> {
    let mut counts = [0u64; POPULARITY_BUCKET_COUNT];

    for track in tracks {
        let popularity = track.popularity.unwrap_or(0).min(100);
        let index =
            ((popularity / POPULARITY_BUCKET_WIDTH) as usize).min(POPULARITY_BUCKET_COUNT - 1);
        counts[index] += 1;
    }

    BUCKET_LABELS
        .into_iter()
        .zip(counts)
        .map(|(range, count)| PopularityBucket { range, count })
        .collect()
}
