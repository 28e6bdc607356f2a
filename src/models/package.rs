use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Report;

/// A group of findings attributed to one analyzed crate/module.
///
/// `count` is derived: the filter overwrites it with the length of the
/// retained report list. Unknown fields are preserved verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Package {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkg: Option<String>,

    #[serde(default)]
    pub raw_reports: Vec<Report>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Package {
    /// Package identifier; a missing `pkg` field counts as empty.
    pub fn name(&self) -> &str {
        self.pkg.as_deref().unwrap_or_default()
    }
}
