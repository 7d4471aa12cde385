use std::collections::BTreeMap;

use serde::Serialize;

use super::theme::Theme;
use super::variable::ExportedVariable;

/// The JSON-ready result of a projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportDocument {
    /// Pass-through: collection name → variables.
    Collections(BTreeMap<String, Vec<ExportedVariable>>),
    /// Theme projection. Always a single theme today; the list leaves room for
    /// multi-theme documents without changing the wire shape.
    Themes(Vec<Theme>),
}

impl ExportDocument {
    pub fn themes(&self) -> Option<&[Theme]> {
        match self {
            ExportDocument::Themes(themes) => Some(themes),
            ExportDocument::Collections(_) => None,
        }
    }

    pub fn collections(&self) -> Option<&BTreeMap<String, Vec<ExportedVariable>>> {
        match self {
            ExportDocument::Collections(map) => Some(map),
            ExportDocument::Themes(_) => None,
        }
    }
}

/// Read-only host state injected into the projector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionContext {
    /// Name of the design document's root, used verbatim as `theme_name`.
    pub theme_name: String,
}

impl ProjectionContext {
    pub fn new(theme_name: impl Into<String>) -> Self {
        Self {
            theme_name: theme_name.into(),
        }
    }
}
