use crate::{ResultView, SearchMode, SortBy, TimeRange};

/// Query option selectors; present in keyword mode only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsView {
    pub sort_by: SortBy,
    pub time_range: TimeRange,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: SearchMode,
    pub term: String,
    pub options: Option<OptionsView>,
    /// False while a request is outstanding.
    pub submit_enabled: bool,
    pub recommended_topics: Vec<String>,
    pub results: ResultView,
    pub cached_queries: usize,
    pub dirty: bool,
}
