//! Paginated response wrapper
//!
//! Every list endpoint wraps its results in the same paging envelope.

use serde::{Deserialize, Serialize};

/// One page of items from a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// URL of the next page, if any; the client does not auto-follow it.
    pub next: Option<String>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
