use crate::SearchMode;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

pub const DEFAULT_RECOMMENDED_TOPICS: [&str; 8] = [
    "rust",
    "programming",
    "technology",
    "science",
    "worldnews",
    "gaming",
    "movies",
    "music",
];

/// How keyword searches are keyed in the result cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheKeyPolicy {
    /// Key by the trimmed term only; changing sort/time/limit reuses the entry.
    TermOnly,
    /// Key by term, sort, time range and limit.
    #[default]
    FullQuery,
}

/// What happens to already shown results when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorResultPolicy {
    #[default]
    KeepPrevious,
    Clear,
}

/// Whether the session issues a query on [`crate::Msg::Startup`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartupPolicy {
    #[default]
    Idle,
    /// Fill the input with this value and submit it in the configured mode.
    Fetch(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: SearchMode,
    pub base_url: String,
    pub cache_keys: CacheKeyPolicy,
    pub error_results: ErrorResultPolicy,
    pub startup: StartupPolicy,
    pub recommended_topics: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_keys: CacheKeyPolicy::default(),
            error_results: ErrorResultPolicy::default(),
            startup: StartupPolicy::default(),
            recommended_topics: DEFAULT_RECOMMENDED_TOPICS
                .iter()
                .map(|topic| (*topic).to_string())
                .collect(),
        }
    }
}

impl SessionConfig {
    /// The single user-facing message shown for any failed fetch.
    pub fn failure_message(&self) -> &'static str {
        match self.mode {
            SearchMode::Keyword => "Failed to fetch results. Please try again later.",
            SearchMode::Subreddit => "Failed to load posts. Please try again later.",
        }
    }
}
