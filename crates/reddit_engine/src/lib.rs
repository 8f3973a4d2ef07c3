//! Reddit search engine: listing fetches and their execution off the UI thread.
mod engine;
mod fetch;
mod listing;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use listing::{parse_listing, ListingPost};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId};
