use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single finding, keyed by the file path it points at.
///
/// Analyzers attach arbitrary extra fields (kind, message, spans); those are
/// carried through untouched via the flattened map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Report {
    /// File path of the finding; a missing field counts as empty.
    pub fn file_path(&self) -> &str {
        self.file.as_deref().unwrap_or_default()
    }
}
