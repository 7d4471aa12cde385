use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{VarexError, VarexResult};
use crate::models::ExportCategory;

/// Export request handling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Category used when a request omits one. `None` makes the category
    /// mandatory for callers.
    pub default_category: Option<ExportCategory>,
}

impl ExportConfig {
    /// Resolve the category of an inbound request.
    ///
    /// Unknown category names are rejected rather than silently widened to `all`.
    pub fn resolve_category(&self, requested: Option<&str>) -> VarexResult<ExportCategory> {
        match requested {
            Some(name) => name.parse(),
            None => self.default_category.ok_or(VarexError::MissingCategory),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_category: Some(defaults::DEFAULT_EXPORT_CATEGORY),
        }
    }
}
