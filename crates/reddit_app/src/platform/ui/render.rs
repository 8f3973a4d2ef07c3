use reddit_core::{
    AppViewModel, OptionsView, PostCard, SearchMode, SortBy, TimeRange, LIMIT_OPTIONS,
};

const RULE: &str = "----------------------------------------";

/// Renders the whole view model as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let mode_label = match view.mode {
        SearchMode::Keyword => "Search",
        SearchMode::Subreddit => "Subreddit",
    };
    lines.push(RULE.to_string());
    lines.push(format!("{mode_label}: {}", view.term));
    if let Some(options) = &view.options {
        lines.push(format_options(options));
    }

    if view.results.loading {
        lines.push("Loading...".to_string());
    }
    if let Some(error) = &view.results.error {
        lines.push(format!("! {error}"));
    }

    for (index, card) in view.results.cards.iter().enumerate() {
        lines.extend(format_card(index + 1, card));
    }

    if !view.recommended_topics.is_empty() {
        let topics = view
            .recommended_topics
            .iter()
            .enumerate()
            .map(|(index, topic)| format!("[{}] {topic}", index + 1))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(format!("Topics: {topics}"));
    }

    let submit = if view.submit_enabled {
        "ready"
    } else {
        "busy"
    };
    lines.push(format!(
        "Status: {submit} | Results: {} | Cached queries: {}",
        view.results.cards.len(),
        view.cached_queries
    ));
    lines
}

pub fn render_prompt(message: &str) -> String {
    format!(">> {message}")
}

pub fn help_lines() -> Vec<String> {
    let join = |items: Vec<&str>| items.join("|");
    let limits = LIMIT_OPTIONS
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("|");
    vec![
        "Type text and press Enter to search.".to_string(),
        format!(
            "/sort {}   /time {}   /limit {limits}",
            join(SortBy::ALL.iter().map(|sort| sort.as_str()).collect()),
            join(TimeRange::ALL.iter().map(|time| time.as_str()).collect()),
        ),
        "/topic N|name   /search (resubmit)   /help   /quit".to_string(),
    ]
}

fn format_options(options: &OptionsView) -> String {
    format!(
        "Sort: {} | Time: {} | Limit: {}",
        options.sort_by.label(),
        options.time_range.label(),
        options.limit
    )
}

fn format_card(position: usize, card: &PostCard) -> Vec<String> {
    let mut lines = vec![format!("{position:>3}. {}", card.title)];
    match &card.date {
        Some(date) => lines.push(format!("     {} | {date}", card.subreddit_label)),
        None => lines.push(format!("     {}", card.subreddit_label)),
    }
    if let Some(body) = &card.body {
        lines.push(format!("     {}", body.replace('\n', " ")));
    }
    lines.push(format!("     {}", card.link));
    lines
}

#[cfg(test)]
mod tests {
    use reddit_core::{render_card, AppViewModel, OptionsView, Post, ResultView, SortBy, TimeRange};

    use super::{help_lines, render};

    fn view_with(results: ResultView) -> AppViewModel {
        AppViewModel {
            term: "cats".to_string(),
            options: Some(OptionsView {
                sort_by: SortBy::Top,
                time_range: TimeRange::Week,
                limit: 10,
            }),
            submit_enabled: true,
            recommended_topics: vec!["rust".to_string()],
            results,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn renders_cards_with_label_date_and_link() {
        let card = render_card(&Post {
            id: "p1".to_string(),
            title: "A cat".to_string(),
            subreddit: "cats".to_string(),
            permalink: "/r/cats/comments/p1/".to_string(),
            created_utc: Some(1_704_456_000),
            selftext: Some("line one\nline two".to_string()),
        });
        let lines = render(&view_with(ResultView {
            cards: vec![card],
            ..ResultView::default()
        }));

        assert!(lines.contains(&"Sort: Top | Time: Week | Limit: 10".to_string()));
        assert!(lines.contains(&"  1. A cat".to_string()));
        assert!(lines.contains(&"     r/cats | Jan 5, 2024".to_string()));
        assert!(lines.contains(&"     line one line two".to_string()));
        assert!(lines.contains(&"     https://reddit.com/r/cats/comments/p1/".to_string()));
        assert!(lines.contains(&"Topics: [1] rust".to_string()));
    }

    #[test]
    fn renders_loading_and_error_banners() {
        let lines = render(&view_with(ResultView {
            loading: true,
            ..ResultView::default()
        }));
        assert!(lines.contains(&"Loading...".to_string()));

        let lines = render(&view_with(ResultView {
            error: Some("Failed to fetch results. Please try again later.".to_string()),
            ..ResultView::default()
        }));
        assert!(lines.contains(&"! Failed to fetch results. Please try again later.".to_string()));
    }

    #[test]
    fn help_lists_every_option() {
        let help = help_lines().join("\n");
        assert!(help.contains("/sort relevance|hot|top|new"));
        assert!(help.contains("/time hour|day|week|month|year|all"));
        assert!(help.contains("/limit 10|25|50|100"));
    }
}
