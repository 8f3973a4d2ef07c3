use std::sync::Arc;

use reddit_core::{
    cache_key, CacheKeyPolicy, Post, ResultCache, ResultSet, SearchMode, SearchParameters, SortBy,
};

fn result_set(ids: &[&str]) -> ResultSet {
    Arc::new(
        ids.iter()
            .map(|id| Post {
                id: (*id).to_string(),
                title: String::new(),
                subreddit: "rust".to_string(),
                permalink: format!("/r/rust/comments/{id}/"),
                created_utc: None,
                selftext: None,
            })
            .collect(),
    )
}

#[test]
fn lookup_returns_the_stored_set() {
    let mut cache = ResultCache::new();
    let stored = result_set(&["b", "a", "c"]);
    cache.store("rust", Arc::clone(&stored));

    let found = cache.lookup("rust").unwrap();

    assert!(Arc::ptr_eq(&found, &stored));
    let ids: Vec<_> = found.iter().map(|post| post.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}

#[test]
fn store_overwrites_previous_entry() {
    let mut cache = ResultCache::new();
    cache.store("rust", result_set(&["old"]));
    let newer = result_set(&["new"]);
    cache.store("rust", Arc::clone(&newer));

    assert!(Arc::ptr_eq(&cache.lookup("rust").unwrap(), &newer));
    assert_eq!(cache.len(), 1);
}

#[test]
fn missing_key_is_absent() {
    let cache = ResultCache::new();
    assert!(cache.lookup("rust").is_none());
    assert!(cache.is_empty());
}

#[test]
fn subreddit_keys_ignore_prefix_and_options() {
    let mut params = SearchParameters::new(" r/rust ");
    params.sort_by = SortBy::New;

    let key = cache_key(SearchMode::Subreddit, CacheKeyPolicy::FullQuery, &params);

    assert_eq!(key, "rust");
}

#[test]
fn keyword_key_policy_controls_option_sensitivity() {
    let plain = SearchParameters::new("rust");
    let mut sorted = SearchParameters::new("rust ");
    sorted.sort_by = SortBy::Top;

    let term_only = |p: &SearchParameters| cache_key(SearchMode::Keyword, CacheKeyPolicy::TermOnly, p);
    let full = |p: &SearchParameters| cache_key(SearchMode::Keyword, CacheKeyPolicy::FullQuery, p);

    assert_eq!(term_only(&plain), term_only(&sorted));
    assert_ne!(full(&plain), full(&sorted));
}
