// Single source of truth for all default values.

use crate::models::{ExportCategory, NameMatching};

// --- Export ---
pub const DEFAULT_EXPORT_CATEGORY: ExportCategory = ExportCategory::All;

// --- Theme ---
pub const DEFAULT_NAME_MATCHING: NameMatching = NameMatching::Exact;
pub const DEFAULT_STRIP_PATH_PREFIX: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;
