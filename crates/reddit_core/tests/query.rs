use proptest::prelude::*;
use reddit_core::{
    build_request_url, build_search_url, build_subreddit_url, QueryError, SearchMode,
    SearchParameters, SortBy, TimeRange,
};
use url::Url;

const BASE: &str = "https://www.reddit.com";

fn params(term: &str) -> SearchParameters {
    SearchParameters::new(term)
}

#[test]
fn search_url_carries_all_options_in_order() {
    let params = SearchParameters {
        term: "cats".to_string(),
        sort_by: SortBy::Top,
        time_range: TimeRange::Week,
        limit: 10,
    };

    let url = build_search_url(BASE, &params).unwrap();

    assert_eq!(
        url,
        "https://www.reddit.com/search.json?q=cats&sort=top&t=week&limit=10"
    );
}

#[test]
fn defaults_are_relevance_all_and_25() {
    let url = build_search_url(BASE, &params("rust")).unwrap();
    assert!(url.ends_with("?q=rust&sort=relevance&t=all&limit=25"));
}

#[test]
fn only_the_term_is_percent_encoded() {
    let url = build_search_url(BASE, &params("cats & dogs?")).unwrap();
    assert!(url.contains("q=cats%20%26%20dogs%3F&sort=relevance"));
}

#[test]
fn blank_term_is_invalid_input() {
    assert_eq!(build_search_url(BASE, &params("   ")), Err(QueryError::InvalidInput));
    assert_eq!(build_subreddit_url(BASE, " \t"), Err(QueryError::InvalidInput));
}

#[test]
fn subreddit_url_uses_listing_path() {
    assert_eq!(
        build_subreddit_url(BASE, "r/popular").unwrap(),
        "https://www.reddit.com/r/popular.json"
    );
}

#[test]
fn trailing_slash_on_base_is_ignored() {
    let url = build_request_url(SearchMode::Subreddit, "http://127.0.0.1:8080/", &params("rust"))
        .unwrap();
    assert_eq!(url, "http://127.0.0.1:8080/r/rust.json");
}

#[test]
fn malformed_base_url_is_reported() {
    let err = build_search_url("not a url", &params("rust")).unwrap_err();
    assert!(matches!(err, QueryError::InvalidUrl(_)));
}

proptest! {
    #[test]
    fn term_round_trips_through_query(term in "\\PC*[a-zA-Z0-9]\\PC*") {
        let url = build_search_url(BASE, &params(&term)).unwrap();
        let parsed = Url::parse(&url).unwrap();
        let q = parsed
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned());
        prop_assert_eq!(q, Some(term));
    }
}
