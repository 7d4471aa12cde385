use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::VarexError;

/// Which projection an export request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ExportCategory {
    /// Every collection, passed through unchanged.
    All,
    /// Whitelisted collections projected into the theme schema.
    Theme,
}

impl ExportCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportCategory::All => "all",
            ExportCategory::Theme => "theme",
        }
    }
}

impl fmt::Display for ExportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportCategory {
    type Err = VarexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ExportCategory::All),
            "theme" => Ok(ExportCategory::Theme),
            other => Err(VarexError::UnknownCategory {
                category: other.to_string(),
            }),
        }
    }
}

/// How variable names are compared against projection keys. Case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NameMatching {
    /// The full name or its final path segment equals the key.
    Exact,
    /// The full name contains the key as a substring.
    Contains,
}
