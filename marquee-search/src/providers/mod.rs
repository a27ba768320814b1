//! Provider implementations for movie search.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::SearchResponse;

pub mod demo;
pub mod http;

pub use demo::DemoProvider;
pub use http::HttpSearchClient;

/// Trait for movie search providers.
///
/// Implementations resolve a free-text query into a normalized
/// `SearchResponse` through different backends (the real HTTP endpoint, or
/// canned data for offline development and tests).
#[async_trait]
pub trait MovieSearch: Send + Sync + std::fmt::Debug {
    /// Searches for movies matching `query`.
    ///
    /// The query is assumed already validated non-empty by the caller;
    /// providers perform no re-validation. Exactly one attempt is made per
    /// call, with no retries.
    ///
    /// # Errors
    /// - `SearchError::Request` - request could not be constructed or sent
    /// - `SearchError::Status` - request settled with a non-success status
    /// - `SearchError::Decode` - response body could not be parsed
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError>;
}
