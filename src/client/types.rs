//! Wire types for the vector-index REST API
//!
//! Field names follow the service's JSON contract (camelCase on the wire).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arbitrary key-value annotations attached to a vector.
///
/// `serde_json::Value` preserves full JSON semantics (string, number,
/// bool, null, nested array/object) without dynamic typing.
pub type Metadata = serde_json::Map<String, Value>;

/// A fixed-length embedding with an identifier and optional metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// Unique identifier within the index
    pub id: String,

    /// The embedding values
    pub values: Vec<f64>,

    /// Optional metadata, omitted from the wire when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Vector {
    /// Create a vector with no metadata
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            values,
            metadata: None,
        }
    }

    /// Attach a full metadata map
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Insert a single metadata entry, replacing any existing value for the key
    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get embedding dimension
    pub fn dim(&self) -> usize {
        self.values.len()
    }
}

/// Body for `POST /vectors/upsert`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRequest {
    /// Vectors to insert or update, keyed by id
    pub vectors: Vec<Vector>,
}

/// Body for `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Number of nearest-neighbor matches requested
    #[serde(rename = "topK")]
    pub top_k: u32,

    /// Query embedding, omitted when querying by id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,

    /// Vector id to query by, omitted when querying by values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Whether matches should carry their metadata
    #[serde(rename = "includeMetadata")]
    pub include_metadata: bool,
}

impl QueryRequest {
    /// Query by embedding values
    pub fn by_values(values: Vec<f64>, top_k: u32) -> Self {
        Self {
            top_k,
            values: Some(values),
            id: None,
            include_metadata: true,
        }
    }

    /// Query by an existing vector's id
    pub fn by_id(id: impl Into<String>, top_k: u32) -> Self {
        Self {
            top_k,
            values: None,
            id: Some(id.into()),
            include_metadata: true,
        }
    }

    /// Override whether metadata is requested with the matches
    pub fn include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }
}

/// Body for `POST /vectors/delete`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    /// Ids of the vectors to delete
    pub ids: Vec<String>,
}

/// One result row of a similarity query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    /// Id of the matched vector
    pub id: String,

    /// Similarity score
    pub score: f64,

    /// Metadata of the matched vector, empty when not requested
    #[serde(default)]
    pub metadata: Metadata,
}

/// Response of `POST /query`
///
/// Matches arrive ranked by score descending per the service's convention;
/// the order is preserved as received, not re-verified locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Matching vectors, best first
    #[serde(default)]
    pub matches: Vec<QueryMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_body_wraps_single_vector() {
        let request = UpsertRequest {
            vectors: vec![Vector::new("v1", vec![0.1, 0.2, 0.3])
                .with_metadata_entry("name", "example")],
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"vectors":[{"id":"v1","values":[0.1,0.2,0.3],"metadata":{"name":"example"}}]}"#
        );
    }

    #[test]
    fn test_upsert_body_omits_absent_metadata() {
        let request = UpsertRequest {
            vectors: vec![Vector::new("v1", vec![1.0])],
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"vectors":[{"id":"v1","values":[1.0]}]}"#);
    }

    #[test]
    fn test_query_body_by_values() {
        let request = QueryRequest::by_values(vec![0.1, 0.2, 0.3], 3);
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"topK":3,"values":[0.1,0.2,0.3],"includeMetadata":true}"#
        );
    }

    #[test]
    fn test_query_body_by_id() {
        let request = QueryRequest::by_id("v1", 5).include_metadata(false);
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"topK":5,"id":"v1","includeMetadata":false}"#);
    }

    #[test]
    fn test_delete_body_is_single_id_sequence() {
        let request = DeleteRequest {
            ids: vec!["v1".to_string()],
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"ids":["v1"]}"#);
    }

    #[test]
    fn test_query_response_preserves_matches() {
        let body = r#"{"matches":[
            {"id":"a","score":0.99,"metadata":{"name":"first"}},
            {"id":"b","score":0.42,"metadata":{}},
            {"id":"c","score":0.10}
        ]}"#;
        let response: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.matches.len(), 3);
        assert_eq!(response.matches[0].id, "a");
        assert_eq!(response.matches[0].score, 0.99);
        assert_eq!(
            response.matches[0].metadata.get("name"),
            Some(&Value::from("first"))
        );
        // Absent metadata decodes to an empty map, not an error
        assert!(response.matches[2].metadata.is_empty());
    }

    #[test]
    fn test_metadata_entry_replaces_existing_key() {
        let vector = Vector::new("v1", vec![1.0])
            .with_metadata_entry("type", "demo")
            .with_metadata_entry("type", "updated-demo");
        let metadata = vector.metadata.unwrap();
        assert_eq!(metadata.get("type"), Some(&Value::from("updated-demo")));
        assert_eq!(metadata.len(), 1);
    }
}
