use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

pub const DEFAULT_LIMIT: u32 = 25;

/// Result-count choices offered by the limit selector.
pub const LIMIT_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Identifier attached to each issued fetch; strictly increasing per session.
pub type RequestId = u64;

/// An ordered list of posts in upstream order. Shared so the cache and the
/// session hand out the same allocation.
pub type ResultSet = Arc<Vec<Post>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} option: {value}")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    #[default]
    Relevance,
    Hot,
    Top,
    New,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [SortBy::Relevance, SortBy::Hot, SortBy::Top, SortBy::New];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::Hot => "hot",
            SortBy::Top => "top",
            SortBy::New => "new",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Relevance => "Relevance",
            SortBy::Hot => "Hot",
            SortBy::Top => "Top",
            SortBy::New => "New",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortBy::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseOptionError {
                kind: "sort",
                value: wanted.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    Hour,
    Day,
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 6] = [
        TimeRange::Hour,
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Year,
        TimeRange::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Hour => "hour",
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Hour => "Hour",
            TimeRange::Day => "Day",
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
            TimeRange::Year => "Year",
            TimeRange::All => "All",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TimeRange::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseOptionError {
                kind: "time range",
                value: wanted.to_string(),
            })
    }
}

/// Which listing endpoint the session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// `/search.json` with sort, time range and limit.
    #[default]
    Keyword,
    /// `/r/{name}.json`; the input is a subreddit name.
    Subreddit,
}

impl FromStr for SearchMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" | "search" => Ok(SearchMode::Keyword),
            "subreddit" | "browse" => Ok(SearchMode::Subreddit),
            other => Err(ParseOptionError {
                kind: "mode",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    pub term: String,
    pub sort_by: SortBy,
    pub time_range: TimeRange,
    pub limit: u32,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            term: String::new(),
            sort_by: SortBy::default(),
            time_range: TimeRange::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchParameters {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn has_term(&self) -> bool {
        !self.term.trim().is_empty()
    }
}

/// The post fields the session displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub subreddit: String,
    /// Path only, e.g. `/r/rust/comments/abc/title/`.
    pub permalink: String,
    /// Unix seconds.
    pub created_utc: Option<i64>,
    pub selftext: Option<String>,
}
