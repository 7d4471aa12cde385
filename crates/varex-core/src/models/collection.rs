use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named variant axis within a collection (e.g. "Light", "Dark").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CollectionMode {
    pub mode_id: String,
    pub name: String,
}

/// A named grouping of variables sharing a mode set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VariableCollection {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub modes: Vec<CollectionMode>,
    #[serde(default)]
    pub default_mode_id: Option<String>,
}

impl VariableCollection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            modes: Vec::new(),
            default_mode_id: None,
        }
    }

    /// Builder-style helper to declare a mode. The first declared mode becomes
    /// the default unless one is already set.
    pub fn with_mode(mut self, mode_id: impl Into<String>, name: impl Into<String>) -> Self {
        let mode_id = mode_id.into();
        if self.default_mode_id.is_none() {
            self.default_mode_id = Some(mode_id.clone());
        }
        self.modes.push(CollectionMode {
            mode_id,
            name: name.into(),
        });
        self
    }

    /// The mode declared as default, falling back to the first declared mode.
    pub fn declared_default_mode(&self) -> Option<&str> {
        self.default_mode_id
            .as_deref()
            .or_else(|| self.modes.first().map(|m| m.mode_id.as_str()))
    }
}
