//! Conversion from storage-client document records to the property-bag
//! objects the host's data-binding layer consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One document as handed over by the storage client: an opaque,
/// self-describing JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Document(pub Map<String, Value>);

impl Document {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Convert a batch of documents into generic JSON objects.
///
/// Pure, one-to-one, and order-preserving: N documents in, N objects out,
/// each a lossless structural copy of the document's own JSON shape.
pub fn documents_to_values(documents: &[Document]) -> Vec<Value> {
    documents
        .iter()
        .map(|document| Value::Object(document.0.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(fields) => Document::new(fields),
            other => panic!("test document must be an object, got {other}"),
        }
    }

    #[test]
    fn conversion_preserves_count_and_order() {
        let docs = vec![
            document(json!({"id": "a", "_ts": 1})),
            document(json!({"id": "b", "_ts": 2})),
        ];
        let values = documents_to_values(&docs);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["id"], "a");
        assert_eq!(values[1]["id"], "b");
    }

    #[test]
    fn conversion_is_lossless() {
        let source = json!({
            "id": "doc-1",
            "payload": {"nested": [1, 2, 3], "flag": true},
            "_etag": "\"0000\"",
        });
        let values = documents_to_values(&[document(source.clone())]);
        assert_eq!(values[0], source);
    }

    #[test]
    fn empty_batch_yields_empty_output() {
        assert!(documents_to_values(&[]).is_empty());
    }

    #[test]
    fn document_deserializes_transparently() {
        let doc: Document = serde_json::from_value(json!({"id": "x"})).expect("deserialize");
        assert_eq!(doc.0.get("id"), Some(&json!("x")));
    }
}
