use thiserror::Error;
use url::Url;

use crate::{SearchMode, SearchParameters};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("search term is empty")]
    InvalidInput,
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

/// Build the listing URL for the given mode.
pub fn build_request_url(
    mode: SearchMode,
    base_url: &str,
    params: &SearchParameters,
) -> Result<String, QueryError> {
    match mode {
        SearchMode::Keyword => build_search_url(base_url, params),
        SearchMode::Subreddit => build_subreddit_url(base_url, &params.term),
    }
}

/// `{base}/search.json?q={term}&sort={sort}&t={time}&limit={limit}`.
///
/// Only the term is percent-encoded; the other fields come from closed sets.
pub fn build_search_url(base_url: &str, params: &SearchParameters) -> Result<String, QueryError> {
    if !params.has_term() {
        return Err(QueryError::InvalidInput);
    }
    let raw = format!(
        "{}/search.json?q={}&sort={}&t={}&limit={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(&params.term),
        params.sort_by.as_str(),
        params.time_range.as_str(),
        params.limit
    );
    validate(&raw)
}

/// `{base}/r/{name}.json`.
pub fn build_subreddit_url(base_url: &str, subreddit: &str) -> Result<String, QueryError> {
    let name = normalize_subreddit(subreddit);
    if name.is_empty() {
        return Err(QueryError::InvalidInput);
    }
    let raw = format!(
        "{}/r/{}.json",
        base_url.trim_end_matches('/'),
        urlencoding::encode(name)
    );
    validate(&raw)
}

/// Trims whitespace and an optional `r/` or `/r/` prefix.
pub fn normalize_subreddit(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .strip_prefix("/r/")
        .or_else(|| trimmed.strip_prefix("r/"))
        .unwrap_or(trimmed)
        .trim_matches('/')
}

fn validate(raw: &str) -> Result<String, QueryError> {
    Url::parse(raw)
        .map(String::from)
        .map_err(|err| QueryError::InvalidUrl(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::normalize_subreddit;

    #[test]
    fn subreddit_prefixes_are_stripped() {
        assert_eq!(normalize_subreddit(" r/rust "), "rust");
        assert_eq!(normalize_subreddit("/r/rust/"), "rust");
        assert_eq!(normalize_subreddit("popular"), "popular");
    }
}
