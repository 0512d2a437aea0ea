//! Domain types and models
//!
//! Deserialization targets for the backend data API. Fields the client never
//! reads are omitted; unknown fields are ignored by serde.

pub mod analytics;
pub mod artist;
pub mod paging;
pub mod playlist;
pub mod track;
pub mod user;

use serde::{Deserialize, Serialize};

/// Time window accepted by the top-items endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    ShortTerm,
    #[default]
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    /// Wire form used in the `time_range` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShortTerm => "short_term",
            Self::MediumTerm => "medium_term",
            Self::LongTerm => "long_term",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote image reference attached to profiles, albums and artists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_wire_form() {
        assert_eq!(TimeRange::ShortTerm.as_str(), "short_term");
        assert_eq!(TimeRange::MediumTerm.as_str(), "medium_term");
        assert_eq!(TimeRange::LongTerm.as_str(), "long_term");
        assert_eq!(TimeRange::default(), TimeRange::MediumTerm);
    }
}
