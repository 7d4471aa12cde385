use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::ExportCategory;

/// Messages sent from the UI panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[ts(export)]
pub enum UiMessage {
    ExportVariables {
        /// Kept as text so unknown categories can be rejected with a message
        /// instead of failing deserialization.
        #[serde(default)]
        category: Option<String>,
    },
}

impl UiMessage {
    pub fn export(category: ExportCategory) -> Self {
        UiMessage::ExportVariables {
            category: Some(category.as_str().to_string()),
        }
    }
}

/// Messages posted back to the UI panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[ts(export)]
pub enum PluginMessage {
    ExportJson {
        data: String,
        count: usize,
        category: ExportCategory,
    },
    Error {
        message: String,
    },
}

impl PluginMessage {
    pub fn is_error(&self) -> bool {
        matches!(self, PluginMessage::Error { .. })
    }
}
