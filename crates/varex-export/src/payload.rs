//! Serialized export documents.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use varex_core::constants::JSON_INDENT;
use varex_core::errors::{VarexError, VarexResult};
use varex_core::models::{ExportCategory, ExportDocument, PluginMessage};

/// One finished export, ready to post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Pretty-printed JSON of the projected document.
    pub data: String,
    /// Variables retained by the filter, across all collections.
    pub count: usize,
    pub category: ExportCategory,
}

impl ExportPayload {
    pub fn new(
        document: &ExportDocument,
        count: usize,
        category: ExportCategory,
    ) -> VarexResult<Self> {
        Ok(Self {
            data: to_pretty_json(document)?,
            count,
            category,
        })
    }

    /// blake3 hex digest of `data`.
    pub fn digest(&self) -> String {
        blake3::hash(self.data.as_bytes()).to_hex().to_string()
    }

    pub fn to_message(&self) -> PluginMessage {
        PluginMessage::ExportJson {
            data: self.data.clone(),
            count: self.count,
            category: self.category,
        }
    }
}

/// Serialize with two-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> VarexResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| VarexError::Serialization {
        reason: e.to_string(),
    })
}
