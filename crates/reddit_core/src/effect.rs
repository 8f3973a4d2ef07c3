use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a GET for the listing at `url`.
    Fetch { request_id: RequestId, url: String },
    /// Show a transient prompt without changing session status.
    ShowPrompt { message: String },
}

pub const EMPTY_TERM_PROMPT: &str = "Please enter a search term";
