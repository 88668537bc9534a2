use crate::error::{Result, WorklaunchError};

/// One JSON document: an object mapping string keys to arbitrary values.
///
/// Built with serde_json's `preserve_order`, so iteration follows insertion
/// order and a saved file reads in the order entries were added.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Abstract interface for raw document I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`KeyValueStore`](super::kv_store::KeyValueStore) handles the "what"
/// (entry semantics, when to persist).
pub trait DocumentBackend {
    /// Load the document.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns `StorageCorrupt` if stored content is not a JSON object.
    fn load_document(&self) -> Result<Option<Document>>;

    /// Replace the stored document wholesale.
    /// MUST NOT leave a half-written document behind on failure.
    fn save_document(&self, document: &Document) -> Result<()>;

    /// Human-readable location (a file path, or a virtual name), for errors and logs.
    fn location(&self) -> String;
}

/// Parses raw stored text into a [`Document`].
///
/// Shared by the backends so that "not JSON" and "JSON but not an object"
/// are reported the same way everywhere.
pub fn parse_document(raw: &str, location: &str) -> Result<Document> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| WorklaunchError::StorageCorrupt {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(WorklaunchError::StorageCorrupt {
            location: location.to_string(),
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
