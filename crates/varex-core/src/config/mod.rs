pub mod defaults;
mod export_config;
mod observability_config;
mod theme_config;

pub use export_config::ExportConfig;
pub use observability_config::ObservabilityConfig;
pub use theme_config::{ThemeCollectionNames, ThemeConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{VarexError, VarexResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VarexConfig {
    pub export: ExportConfig,
    pub theme: ThemeConfig,
    pub observability: ObservabilityConfig,
}

impl VarexConfig {
    /// Parse configuration from TOML. Missing sections and keys take defaults.
    pub fn from_toml(source: &str) -> VarexResult<Self> {
        toml::from_str(source).map_err(|e| VarexError::Config {
            reason: e.to_string(),
        })
    }

    /// Serialize configuration back to TOML.
    pub fn to_toml(&self) -> VarexResult<String> {
        toml::to_string_pretty(self).map_err(|e| VarexError::Config {
            reason: e.to_string(),
        })
    }
}
