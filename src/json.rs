//! JSON serialization of trees for inspection and snapshot tooling.

use crate::error::Result;
use crate::model::TNode;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Human-readable, indented output.
    Pretty,
    /// Compact single-line output.
    Compact,
}

/// Serialize a transient tree to JSON.
pub fn to_json(tree: &TNode, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(tree)?,
        JsonFormat::Compact => serde_json::to_string(tree)?,
    };
    Ok(json)
}
