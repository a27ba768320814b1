//! Client configuration.

use url::Url;

use crate::errors::SearchError;

/// Static configuration for the search client.
///
/// The base URL is injected explicitly at construction; the client never
/// reads ambient environment state.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    base_url: String,
}

impl SearchConfig {
    /// Creates a configuration from a base URL, validating it up front.
    ///
    /// A trailing slash is stripped so endpoint paths concatenate cleanly.
    ///
    /// # Errors
    /// - `SearchError::Request` - `base_url` is not a valid absolute URL
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        Url::parse(base_url).map_err(|e| SearchError::Request {
            reason: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
