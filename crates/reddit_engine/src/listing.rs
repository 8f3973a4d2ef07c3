use serde::Deserialize;

use crate::{FailureKind, FetchError};

/// Post fields read from a listing child's `data` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingPost {
    pub id: String,
    pub title: String,
    pub subreddit: String,
    pub permalink: String,
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub selftext: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: ListingPost,
}

/// Decode `{ data: { children: [ { data: Post } ] } }`, preserving order.
pub fn parse_listing(bytes: &[u8]) -> Result<Vec<ListingPost>, FetchError> {
    let listing: Listing = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;
    Ok(listing
        .data
        .children
        .into_iter()
        .map(|child| child.data)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::parse_listing;
    use crate::FailureKind;

    #[test]
    fn extracts_posts_in_order_and_ignores_extra_fields() {
        let body = br#"{"kind":"Listing","data":{"after":null,"children":[
            {"kind":"t3","data":{"id":"b","title":"B","subreddit":"rust","permalink":"/r/rust/b/","created_utc":1704456000.0,"selftext":"","score":3}},
            {"kind":"t3","data":{"id":"a","title":"A","subreddit":"rust","permalink":"/r/rust/a/"}}
        ]}}"#;

        let posts = parse_listing(body).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "b");
        assert_eq!(posts[0].created_utc, Some(1_704_456_000.0));
        assert_eq!(posts[1].selftext, None);
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let err = parse_listing(br#"{"data":{"items":[]}}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::Parse);

        let err = parse_listing(b"<html></html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::Parse);
    }

    #[test]
    fn null_optionals_are_accepted() {
        let body = br#"{"data":{"children":[{"data":{"id":"x","title":"X","subreddit":"s","permalink":"/p/","created_utc":null,"selftext":null}}]}}"#;
        let posts = parse_listing(body).unwrap();
        assert_eq!(posts[0].created_utc, None);
    }
}
