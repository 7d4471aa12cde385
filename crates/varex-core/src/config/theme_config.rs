use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;
use crate::models::NameMatching;

/// Theme projection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Collections retained by a theme export (exact name match).
    pub collection_whitelist: Vec<String>,
    /// Which collection feeds which projection rule.
    pub collections: ThemeCollectionNames,
    /// How variable names are compared against rule keys.
    pub name_matching: NameMatching,
    /// Keep only the final `/` segment of a variable name in list entries.
    pub strip_path_prefix: bool,
}

impl ThemeConfig {
    /// Whether a collection passes the theme filter.
    pub fn is_whitelisted(&self, collection_name: &str) -> bool {
        self.collection_whitelist
            .iter()
            .any(|name| name == collection_name)
    }

    /// The single-collection layout used by older documents: one collection
    /// is retained and feeds every projection rule.
    pub fn legacy() -> Self {
        Self {
            collection_whitelist: vec![constants::LEGACY_THEME_COLLECTION.to_string()],
            collections: ThemeCollectionNames::single(constants::LEGACY_THEME_COLLECTION),
            ..Self::default()
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            collection_whitelist: constants::DEFAULT_THEME_COLLECTIONS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            collections: ThemeCollectionNames::default(),
            name_matching: defaults::DEFAULT_NAME_MATCHING,
            strip_path_prefix: defaults::DEFAULT_STRIP_PATH_PREFIX,
        }
    }
}

/// Collection name bound to each projection rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeCollectionNames {
    pub text_colours: String,
    pub background_colours: String,
    pub link_colours: String,
    pub fonts: String,
    pub link_decoration: String,
}

impl ThemeCollectionNames {
    /// Bind every rule to the same collection.
    pub fn single(collection_name: &str) -> Self {
        Self {
            text_colours: collection_name.to_string(),
            background_colours: collection_name.to_string(),
            link_colours: collection_name.to_string(),
            fonts: collection_name.to_string(),
            link_decoration: collection_name.to_string(),
        }
    }
}

impl Default for ThemeCollectionNames {
    fn default() -> Self {
        Self {
            text_colours: constants::TEXT_COLOURS_COLLECTION.to_string(),
            background_colours: constants::BACKGROUND_COLOURS_COLLECTION.to_string(),
            link_colours: constants::LINK_COLOURS_COLLECTION.to_string(),
            fonts: constants::FONTS_COLLECTION.to_string(),
            link_decoration: constants::LINK_DECORATION_COLLECTION.to_string(),
        }
    }
}
