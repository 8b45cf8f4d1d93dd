//! Page metadata.

mod meta;

pub use meta::PageMeta;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
