//! Data types for the movie search contract.
//!
//! The wire shape (`SearchResponsePayload`) and the client-internal shape
//! (`SearchResponse`) are deliberately distinct records connected by a
//! total mapping; the server's `description` field is renamed to `data`
//! during normalization, never merged structurally.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single movie record as returned by the search backend.
///
/// Wire field names follow the upstream API convention (`#IMDB_ID`,
/// `#TITLE`, ...). The record is opaque and immutable once fetched; fields
/// the client does not consume are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier, used verbatim as the detail-view routing key.
    #[serde(rename = "#IMDB_ID")]
    pub imdb_id: String,

    /// Display title.
    #[serde(rename = "#TITLE")]
    pub title: String,

    /// Release year.
    #[serde(rename = "#YEAR")]
    pub year: Option<u16>,

    /// Main cast, formatted by the backend.
    #[serde(rename = "#ACTORS")]
    pub actors: Option<String>,

    /// Poster image URL.
    #[serde(rename = "#IMG_POSTER")]
    pub poster_url: Option<String>,

    /// Remaining wire fields, passed through opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Exact wire shape of a search response body.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponsePayload {
    /// Whether the server considers the request successful.
    pub ok: bool,

    /// Matching movie records; the wire name for the result field.
    #[serde(default)]
    pub description: Vec<Movie>,

    /// Server error code, meaningful only when `ok` is false.
    #[serde(default)]
    pub error_code: i64,
}

/// Client-internal search response contract.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    /// Whether the server considers the request successful.
    pub ok: bool,

    /// Matching movie records, in server order.
    pub data: Vec<Movie>,

    /// Server error code, meaningful only when `ok` is false.
    pub error_code: i64,
}

impl From<SearchResponsePayload> for SearchResponse {
    /// Normalizes the wire payload into the internal contract.
    fn from(payload: SearchResponsePayload) -> Self {
        Self {
            ok: payload.ok,
            data: payload.description,
            error_code: payload.error_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserializes_wire_field_names() {
        let raw = serde_json::json!({
            "#IMDB_ID": "tt1375666",
            "#TITLE": "Inception",
            "#YEAR": 2010,
            "#ACTORS": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "#IMG_POSTER": "https://m.media-amazon.com/images/inception.jpg"
        });

        let movie: Movie = serde_json::from_value(raw).unwrap();
        assert_eq!(movie.imdb_id, "tt1375666");
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, Some(2010));
        assert!(movie.extra.is_empty());
    }

    #[test]
    fn test_movie_preserves_unknown_fields() {
        let raw = serde_json::json!({
            "#IMDB_ID": "tt0133093",
            "#TITLE": "The Matrix",
            "#YEAR": 1999,
            "#RANK": 16,
            "#AKA": "The Matrix (1999)"
        });

        let movie: Movie = serde_json::from_value(raw).unwrap();
        assert_eq!(movie.extra.get("#RANK"), Some(&serde_json::json!(16)));
        assert_eq!(
            movie.extra.get("#AKA"),
            Some(&serde_json::json!("The Matrix (1999)"))
        );

        // Round-trip keeps unknown fields on the wire shape.
        let back = serde_json::to_value(&movie).unwrap();
        assert_eq!(back.get("#RANK"), Some(&serde_json::json!(16)));
    }

    #[test]
    fn test_payload_normalization_renames_description_to_data() {
        let raw = serde_json::json!({
            "ok": true,
            "description": [
                { "#IMDB_ID": "tt1375666", "#TITLE": "Inception", "#YEAR": 2010 },
                { "#IMDB_ID": "tt0816692", "#TITLE": "Interstellar", "#YEAR": 2014 }
            ],
            "error_code": 0
        });

        let payload: SearchResponsePayload = serde_json::from_value(raw).unwrap();
        let response = SearchResponse::from(payload);

        assert!(response.ok);
        assert_eq!(response.error_code, 0);
        assert_eq!(response.data.len(), 2);
        // Order-preserving, no dedup or sort.
        assert_eq!(response.data[0].title, "Inception");
        assert_eq!(response.data[1].title, "Interstellar");
    }

    #[test]
    fn test_payload_tolerates_missing_result_field() {
        let raw = serde_json::json!({ "ok": false, "error_code": 404 });

        let payload: SearchResponsePayload = serde_json::from_value(raw).unwrap();
        let response = SearchResponse::from(payload);

        assert!(!response.ok);
        assert!(response.data.is_empty());
        assert_eq!(response.error_code, 404);
    }
}
