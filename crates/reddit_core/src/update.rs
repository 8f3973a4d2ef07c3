use search_logging::search_warn;

use crate::query::build_request_url;
use crate::{AppState, Effect, Msg, QueryError, StartupPolicy, EMPTY_TERM_PROMPT};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) | Msg::TopicSelected(text) => {
            state.set_term(text);
            Vec::new()
        }
        Msg::SortChanged(sort_by) => {
            state.set_sort(sort_by);
            Vec::new()
        }
        Msg::TimeRangeChanged(time_range) => {
            state.set_time_range(time_range);
            Vec::new()
        }
        Msg::LimitChanged(limit) => {
            state.set_limit(limit);
            Vec::new()
        }
        Msg::SearchSubmitted => submit(&mut state),
        Msg::Startup => match state.config().startup.clone() {
            StartupPolicy::Idle => Vec::new(),
            StartupPolicy::Fetch(term) => {
                state.set_term(term);
                submit(&mut state)
            }
        },
        Msg::FetchCompleted { request_id, result } => {
            state.complete_request(request_id, result);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    // The submit control is disabled while a request is outstanding.
    if state.is_loading() {
        return Vec::new();
    }
    if !state.has_submittable_term() {
        return empty_term_prompt();
    }

    let key = state.current_cache_key();
    if let Some(results) = state.cache().lookup(&key) {
        state.apply_cache_hit(results);
        return Vec::new();
    }

    let config = state.config();
    match build_request_url(config.mode, &config.base_url, state.params()) {
        Ok(url) => {
            let request_id = state.begin_request(key);
            vec![Effect::Fetch { request_id, url }]
        }
        Err(QueryError::InvalidInput) => empty_term_prompt(),
        Err(err) => {
            search_warn!("Could not build request url: {}", err);
            let message = state.config().failure_message().to_string();
            state.fail(message);
            Vec::new()
        }
    }
}

fn empty_term_prompt() -> Vec<Effect> {
    vec![Effect::ShowPrompt {
        message: EMPTY_TERM_PROMPT.to_string(),
    }]
}
