//! Reddit search core: pure state machine, query building, caching and view-model helpers.
mod cache;
mod config;
mod effect;
mod msg;
mod query;
mod result_view;
mod state;
mod types;
mod update;
mod view_model;

pub use cache::{cache_key, ResultCache};
pub use config::{
    CacheKeyPolicy, ErrorResultPolicy, SessionConfig, StartupPolicy, DEFAULT_BASE_URL,
    DEFAULT_RECOMMENDED_TOPICS,
};
pub use effect::{Effect, EMPTY_TERM_PROMPT};
pub use msg::{FetchFailure, Msg};
pub use query::{
    build_request_url, build_search_url, build_subreddit_url, normalize_subreddit, QueryError,
};
pub use result_view::{
    format_post_date, render_card, render_results, truncate_body, PostCard, ResultView,
    BODY_PREVIEW_CHARS, POST_BASE_URL, TRUNCATION_MARKER,
};
pub use state::{AppState, SessionStatus};
pub use types::{
    ParseOptionError, Post, RequestId, ResultSet, SearchMode, SearchParameters, SortBy,
    TimeRange, DEFAULT_LIMIT, LIMIT_OPTIONS,
};
pub use update::update;
pub use view_model::{AppViewModel, OptionsView};
