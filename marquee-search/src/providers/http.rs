//! HTTP search provider backed by the remote movie endpoint.

use async_trait::async_trait;
use tracing::debug;

use super::MovieSearch;
use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::types::{SearchResponse, SearchResponsePayload};

/// Fixed path prefix of the search endpoint; the percent-encoded query is
/// concatenated directly after it.
const SEARCH_ENDPOINT: &str = "/search?q=";

/// HTTP client for the movie search backend.
///
/// Issues one `GET` per search with no retries, no custom headers, and no
/// client-imposed deadline.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    config: SearchConfig,
}

impl HttpSearchClient {
    /// Creates a client from explicit configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Builds the outbound request URL for `query`.
    fn request_url(&self, query: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url(),
            SEARCH_ENDPOINT,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl MovieSearch for HttpSearchClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let url = self.request_url(query);
        debug!(%url, "dispatching search request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(SearchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let payload: SearchResponsePayload = response
            .json()
            .await
            .map_err(SearchError::from_transport)?;

        Ok(SearchResponse::from(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> HttpSearchClient {
        HttpSearchClient::new(SearchConfig::new(base_url).unwrap())
    }

    #[test]
    fn test_request_url_percent_encodes_query() {
        let client = client("http://localhost:8080");
        assert_eq!(
            client.request_url("the matrix"),
            "http://localhost:8080/search?q=the%20matrix"
        );
        assert_eq!(
            client.request_url("fast & furious"),
            "http://localhost:8080/search?q=fast%20%26%20furious"
        );
    }

    #[test]
    fn test_request_url_passes_plain_query_verbatim() {
        let client = client("http://localhost:8080");
        assert_eq!(
            client.request_url("Inception"),
            "http://localhost:8080/search?q=Inception"
        );
    }
}
