//! Events flowing through the search pipeline.

use marquee_search::{SearchError, SearchResponse};

/// Events consumed by the search orchestrator.
#[derive(Debug)]
pub enum AppEvent {
    /// A validated query submitted from the search bar (raw, untrimmed).
    QuerySubmitted(String),

    /// A dispatched search request settled.
    SearchCompleted {
        /// Generation of the submission this settlement belongs to.
        generation: u64,
        /// Outcome of the request.
        result: Result<SearchResponse, SearchError>,
    },
}
