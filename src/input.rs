use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::FilterError;
use crate::models::AnalysisDocument;

/// Load and structurally check an analysis result document.
///
/// Invalid JSON is a parse error; JSON that is not an object, or whose
/// `data` field is not an array, is malformed input. Missing `file`/`pkg`
/// fields inside entries are tolerated (they default to empty later).
pub fn load_document(path: &Path) -> Result<AnalysisDocument, FilterError> {
    let text = fs::read_to_string(path).map_err(|source| FilterError::Io {
        context: format!("failed to read input {}", path.display()),
        source,
    })?;

    let value: Value = serde_json::from_str(&text)?;
    if !value.is_object() {
        return Err(FilterError::MalformedInput(
            "top-level JSON value is not an object".to_string(),
        ));
    }
    if let Some(data) = value.get("data") {
        if !data.is_array() {
            return Err(FilterError::MalformedInput(
                "`data` field is not an array".to_string(),
            ));
        }
    }

    serde_json::from_value(value).map_err(|e| FilterError::MalformedInput(e.to_string()))
}
