use chrono::DateTime;

use crate::{Post, SessionStatus};

pub const POST_BASE_URL: &str = "https://reddit.com";
pub const BODY_PREVIEW_CHARS: usize = 200;
pub const TRUNCATION_MARKER: &str = "...";

/// Display tree for the result area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultView {
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<PostCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    /// `r/{subreddit}`.
    pub subreddit_label: String,
    /// `Jan 5, 2024`.
    pub date: Option<String>,
    pub body: Option<String>,
    pub link: String,
}

/// Pure rendering of a status and its post list.
pub fn render_results(status: &SessionStatus, posts: &[Post]) -> ResultView {
    let (loading, error) = match status {
        SessionStatus::Idle => (false, None),
        SessionStatus::Loading => (true, None),
        SessionStatus::Error(message) => (false, Some(message.clone())),
    };
    ResultView {
        loading,
        error,
        cards: posts.iter().map(render_card).collect(),
    }
}

pub fn render_card(post: &Post) -> PostCard {
    PostCard {
        id: post.id.clone(),
        title: post.title.clone(),
        subreddit_label: format!("r/{}", post.subreddit),
        date: post.created_utc.and_then(format_post_date),
        body: post
            .selftext
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(truncate_body),
        link: format!("{POST_BASE_URL}{}", post.permalink),
    }
}

/// Formats Unix seconds (UTC) as `{Mon} {day}, {year}`.
pub fn format_post_date(created_utc: i64) -> Option<String> {
    DateTime::from_timestamp(created_utc, 0).map(|dt| dt.format("%b %-d, %Y").to_string())
}

/// Keeps the first [`BODY_PREVIEW_CHARS`] characters and appends the marker
/// when anything was cut.
pub fn truncate_body(text: &str) -> String {
    match text.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((end, _)) => format!("{}{TRUNCATION_MARKER}", &text[..end]),
        None => text.to_string(),
    }
}
