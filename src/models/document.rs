use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Package, Report};

/// One element of the `data` list.
///
/// Input documents only carry packages; after filtering the list may also
/// contain a single bare report (the lockfile passthrough). Untagged, so
/// both shapes round-trip as plain JSON objects. Note that on deserialize
/// every object matches the `Package` variant (all of its fields are
/// optional), which mirrors how the filter treats re-read output: a bare
/// report simply has no `raw_reports` and contributes nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Entry {
    Package(Package),
    Report(Report),
}

/// Top-level analysis result document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnalysisDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Entry>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
