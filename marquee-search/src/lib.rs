//! Marquee Search - movie search client layer
//!
//! Issues search requests against a remote movie endpoint, normalizes the
//! wire payload into the client-internal contract, and classifies failures
//! into the exact user-facing messages shown by the error toast.

#![warn(missing_docs)]

pub mod config;
pub mod errors;
pub mod providers;
pub mod types;

// Re-export main types
pub use config::SearchConfig;
pub use errors::SearchError;
pub use providers::{DemoProvider, HttpSearchClient, MovieSearch};
pub use types::{Movie, SearchResponse, SearchResponsePayload};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
