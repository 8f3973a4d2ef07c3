use crate::{Post, RequestId, SortBy, TimeRange};

/// Why a fetch did not produce a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// Transport failure or non-success HTTP status.
    Network,
    /// Body did not match the listing shape.
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input.
    InputChanged(String),
    /// User picked a sort order.
    SortChanged(SortBy),
    /// User picked a time range.
    TimeRangeChanged(TimeRange),
    /// User picked a result limit. Zero is ignored.
    LimitChanged(u32),
    /// User clicked a recommended topic; fills the input without submitting.
    TopicSelected(String),
    /// User submitted the current input.
    SearchSubmitted,
    /// Shell finished setting up; applies the startup policy.
    Startup,
    /// Engine completion for a fetch.
    FetchCompleted {
        request_id: RequestId,
        result: Result<Vec<Post>, FetchFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
