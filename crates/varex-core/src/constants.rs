/// Inbound message type that triggers an export.
pub const EXPORT_VARIABLES_MESSAGE: &str = "export-variables";

/// Prefix of every outbound error message.
pub const ERROR_MESSAGE_PREFIX: &str = "Error exporting variables: ";

/// Collection names that feed the theme projection.
pub const TEXT_COLOURS_COLLECTION: &str = "Text Colours";
pub const BACKGROUND_COLOURS_COLLECTION: &str = "Background Colours";
pub const LINK_COLOURS_COLLECTION: &str = "Link Colours";
pub const FONTS_COLLECTION: &str = "Fonts";
pub const LINK_DECORATION_COLLECTION: &str = "Link Decoration";

/// Collections retained for a theme export unless configured otherwise.
pub const DEFAULT_THEME_COLLECTIONS: [&str; 5] = [
    TEXT_COLOURS_COLLECTION,
    BACKGROUND_COLOURS_COLLECTION,
    LINK_COLOURS_COLLECTION,
    FONTS_COLLECTION,
    LINK_DECORATION_COLLECTION,
];

/// Single-collection whitelist used by older documents that kept every
/// theme variable in one collection.
pub const LEGACY_THEME_COLLECTION: &str = "Theme Settings";

/// Separator between path segments in a variable name (`Primary/textPrimary`).
pub const NAME_PATH_SEPARATOR: char = '/';

/// Maximum number of alias hops followed when resolving a value.
pub const MAX_ALIAS_DEPTH: usize = 16;

/// Indentation used for exported JSON.
pub const JSON_INDENT: &[u8] = b"  ";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "VAREX_LOG";
