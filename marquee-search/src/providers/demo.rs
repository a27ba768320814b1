//! Canned search provider for offline development.

use async_trait::async_trait;
use serde_json::Map;

use super::MovieSearch;
use crate::errors::SearchError;
use crate::types::{Movie, SearchResponse};

/// Provider returning deterministic canned results without network access.
///
/// Lets the complete search workflow be exercised and demonstrated when no
/// backend is reachable.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a new demo provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MovieSearch for DemoProvider {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let movies = vec![
            Movie {
                imdb_id: "tt0000001".to_string(),
                title: query.to_string(),
                year: Some(2024),
                actors: Some("Demo Actor, Another Actor".to_string()),
                poster_url: Some("https://example.com/posters/demo1.jpg".to_string()),
                extra: Map::new(),
            },
            Movie {
                imdb_id: "tt0000002".to_string(),
                title: format!("{query} II"),
                year: Some(2025),
                actors: Some("Demo Actor".to_string()),
                poster_url: None,
                extra: Map::new(),
            },
        ];

        Ok(SearchResponse {
            ok: true,
            data: movies,
            error_code: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_provider_echoes_query() {
        let provider = DemoProvider::new();
        let response = provider.search("Test Movie").await.unwrap();

        assert!(response.ok);
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].title, "Test Movie");
    }
}
