use std::collections::HashMap;

use crate::query::normalize_subreddit;
use crate::{CacheKeyPolicy, ResultSet, SearchMode, SearchParameters};

/// Session-lifetime memo of the last successful result set per query key.
///
/// Entries are overwritten by later successes for the same key and are never
/// evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultCache {
    entries: HashMap<String, ResultSet>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &str) -> Option<ResultSet> {
        self.entries.get(key).cloned()
    }

    pub fn store(&mut self, key: impl Into<String>, results: ResultSet) {
        self.entries.insert(key.into(), results);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the cache key for a query.
///
/// Subreddit mode always keys by the normalized subreddit name. Keyword mode
/// keys by the trimmed term, or by term plus every query option under
/// [`CacheKeyPolicy::FullQuery`].
pub fn cache_key(mode: SearchMode, policy: CacheKeyPolicy, params: &SearchParameters) -> String {
    match mode {
        SearchMode::Subreddit => normalize_subreddit(&params.term).to_string(),
        SearchMode::Keyword => {
            let term = params.term.trim();
            match policy {
                CacheKeyPolicy::TermOnly => term.to_string(),
                CacheKeyPolicy::FullQuery => format!(
                    "{term}\u{1f}{}\u{1f}{}\u{1f}{}",
                    params.sort_by, params.time_range, params.limit
                ),
            }
        }
    }
}
