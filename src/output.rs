use std::fs;
use std::path::Path;

use crate::error::FilterError;
use crate::models::AnalysisDocument;

/// Serialize the filtered document with 2-space indentation.
///
/// serde_json emits non-ASCII characters literally, so paths and messages
/// round-trip unescaped.
pub fn write_document(document: &AnalysisDocument, path: &Path) -> Result<(), FilterError> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json).map_err(|source| FilterError::Io {
        context: format!("failed to write output {}", path.display()),
        source,
    })
}
