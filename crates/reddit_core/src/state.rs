use std::sync::Arc;

use crate::cache::cache_key;
use crate::query::normalize_subreddit;
use crate::result_view::render_results;
use crate::view_model::{AppViewModel, OptionsView};
use crate::{
    ErrorResultPolicy, FetchFailure, Post, RequestId, ResultCache, ResultSet, SearchMode,
    SearchParameters, SessionConfig, SortBy, TimeRange,
};

/// Exactly one status is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    request_id: RequestId,
    cache_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    config: SessionConfig,
    params: SearchParameters,
    status: SessionStatus,
    results: Option<ResultSet>,
    cache: ResultCache,
    last_request_id: RequestId,
    in_flight: Option<InFlight>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let results: &[Post] = self
            .results
            .as_ref()
            .map_or(&[][..], |results| results.as_slice());
        AppViewModel {
            mode: self.config.mode,
            term: self.params.term.clone(),
            options: (self.config.mode == SearchMode::Keyword).then(|| OptionsView {
                sort_by: self.params.sort_by,
                time_range: self.params.time_range,
                limit: self.params.limit,
            }),
            submit_enabled: !self.is_loading(),
            recommended_topics: self.config.recommended_topics.clone(),
            results: render_results(&self.status, results),
            cached_queries: self.cache.len(),
            dirty: self.dirty,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn params(&self) -> &SearchParameters {
        &self.params
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn in_flight_request(&self) -> Option<RequestId> {
        self.in_flight.as_ref().map(|in_flight| in_flight.request_id)
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Whether the input names something to fetch in the current mode. In
    /// subreddit mode a bare `r/` prefix counts as empty.
    pub fn has_submittable_term(&self) -> bool {
        match self.config.mode {
            SearchMode::Keyword => self.params.has_term(),
            SearchMode::Subreddit => !normalize_subreddit(&self.params.term).is_empty(),
        }
    }

    pub(crate) fn current_cache_key(&self) -> String {
        cache_key(self.config.mode, self.config.cache_keys, &self.params)
    }

    pub(crate) fn set_term(&mut self, term: String) {
        if self.params.term != term {
            self.params.term = term;
            self.dirty = true;
        }
    }

    pub(crate) fn set_sort(&mut self, sort_by: SortBy) {
        if self.params.sort_by != sort_by {
            self.params.sort_by = sort_by;
            self.dirty = true;
        }
    }

    pub(crate) fn set_time_range(&mut self, time_range: TimeRange) {
        if self.params.time_range != time_range {
            self.params.time_range = time_range;
            self.dirty = true;
        }
    }

    pub(crate) fn set_limit(&mut self, limit: u32) {
        if limit > 0 && self.params.limit != limit {
            self.params.limit = limit;
            self.dirty = true;
        }
    }

    pub(crate) fn apply_cache_hit(&mut self, results: ResultSet) {
        self.results = Some(results);
        self.status = SessionStatus::Idle;
        self.dirty = true;
    }

    /// Moves to Loading and records the request as the only one in flight.
    pub(crate) fn begin_request(&mut self, cache_key: String) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.in_flight = Some(InFlight {
            request_id,
            cache_key,
        });
        self.status = SessionStatus::Loading;
        self.dirty = true;
        request_id
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.in_flight = None;
        if self.config.error_results == ErrorResultPolicy::Clear {
            self.results = None;
        }
        self.status = SessionStatus::Error(message);
        self.dirty = true;
    }

    /// Applies a completion. Returns false, leaving the state untouched, when
    /// `request_id` is not the in-flight request.
    pub(crate) fn complete_request(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<Post>, FetchFailure>,
    ) -> bool {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.request_id == request_id => in_flight,
            other => {
                self.in_flight = other;
                return false;
            }
        };

        match result {
            Ok(posts) => {
                let results: ResultSet = Arc::new(posts);
                self.cache.store(in_flight.cache_key, Arc::clone(&results));
                self.results = Some(results);
                self.status = SessionStatus::Idle;
                self.dirty = true;
            }
            Err(_) => {
                let message = self.config.failure_message().to_string();
                self.fail(message);
            }
        }
        true
    }
}
