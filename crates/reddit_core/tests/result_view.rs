use pretty_assertions::assert_eq;
use reddit_core::{render_results, Post, PostCard, SessionStatus, BODY_PREVIEW_CHARS};

fn fixture() -> Vec<Post> {
    vec![
        Post {
            id: "p1".to_string(),
            title: "Rust 2024 is out".to_string(),
            subreddit: "rust".to_string(),
            permalink: "/r/rust/comments/p1/rust_2024/".to_string(),
            created_utc: Some(1_704_456_000),
            selftext: Some("Short body".to_string()),
        },
        Post {
            id: "p2".to_string(),
            title: "A link post".to_string(),
            subreddit: "programming".to_string(),
            permalink: "/r/programming/comments/p2/link/".to_string(),
            created_utc: None,
            selftext: Some(String::new()),
        },
        Post {
            id: "p3".to_string(),
            title: "Long read".to_string(),
            subreddit: "science".to_string(),
            permalink: "/r/science/comments/p3/long/".to_string(),
            created_utc: Some(0),
            selftext: Some("x".repeat(BODY_PREVIEW_CHARS + 50)),
        },
    ]
}

#[test]
fn three_posts_render_three_cards() {
    let view = render_results(&SessionStatus::Idle, &fixture());

    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.cards.len(), 3);
    assert_eq!(
        view.cards[0],
        PostCard {
            id: "p1".to_string(),
            title: "Rust 2024 is out".to_string(),
            subreddit_label: "r/rust".to_string(),
            date: Some("Jan 5, 2024".to_string()),
            body: Some("Short body".to_string()),
            link: "https://reddit.com/r/rust/comments/p1/rust_2024/".to_string(),
        }
    );
    assert_eq!(view.cards[1].subreddit_label, "r/programming");
    assert_eq!(view.cards[1].link, "https://reddit.com/r/programming/comments/p2/link/");
    assert_eq!(view.cards[2].title, "Long read");
}

#[test]
fn empty_selftext_and_missing_date_are_omitted() {
    let view = render_results(&SessionStatus::Idle, &fixture());

    assert_eq!(view.cards[1].date, None);
    assert_eq!(view.cards[1].body, None);
    assert_eq!(view.cards[2].date.as_deref(), Some("Jan 1, 1970"));
}

#[test]
fn long_selftext_is_cut_with_marker() {
    let view = render_results(&SessionStatus::Idle, &fixture());

    let expected = format!("{}...", "x".repeat(BODY_PREVIEW_CHARS));
    assert_eq!(view.cards[2].body.as_deref(), Some(expected.as_str()));
}

#[test]
fn loading_and_error_flags_follow_status() {
    let loading = render_results(&SessionStatus::Loading, &[]);
    assert!(loading.loading);
    assert!(loading.cards.is_empty());

    let errored = render_results(&SessionStatus::Error("boom".to_string()), &fixture());
    assert!(!errored.loading);
    assert_eq!(errored.error.as_deref(), Some("boom"));
    assert_eq!(errored.cards.len(), 3);
}

#[test]
fn rendering_is_idempotent() {
    let posts = fixture();
    assert_eq!(
        render_results(&SessionStatus::Idle, &posts),
        render_results(&SessionStatus::Idle, &posts)
    );
}
