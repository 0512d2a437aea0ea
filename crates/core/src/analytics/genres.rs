//! Genre frequency summary

use std::collections::HashMap;

use tunescope_domain::constants::GENRE_TOP_N;
use tunescope_domain::types::analytics::GenreCount;
use tunescope_domain::Artist;

/// Count genre tags across the supplied artists.
///
/// An artist with k genre tags contributes to k counters. The result is
/// sorted descending by count with ties broken by first-encounter order,
/// truncated to the top five. Empty input yields an empty summary.
#[must_use]
pub fn summarize_genres(artists: &[Artist]) -> Vec<GenreCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for artist in artists {
        for genre in &artist.genres {
            let entry = counts.entry(genre.as_str()).or_insert(0);
            if *entry == 0 {
                order.push(genre.as_str());
            }
            *entry += 1;
        }
    }

    let mut summary: Vec<GenreCount> = order
        .into_iter()
        .map(|name| GenreCount { name: name.to_string(), count: counts[name] })
        .collect();

    // Stable sort keeps first-encounter order within equal counts.
    summary.sort_by(|a, b| b.count.cmp(&a.count));
    summary.truncate(GENRE_TOP_N);
    summary
}
