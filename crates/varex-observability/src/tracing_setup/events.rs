//! Structured log events for the export request lifecycle.
//!
//! Each function emits a `tracing` event with structured fields.

use varex_core::models::ExportCategory;

/// Log an accepted export request.
pub fn export_requested(category: ExportCategory) {
    tracing::info!(
        event = "export_requested",
        category = %category,
        "export requested"
    );
}

/// Log the raw fetch result before grouping.
pub fn variables_fetched(variables: usize, collections: usize) {
    tracing::debug!(
        event = "variables_fetched",
        variables = variables,
        collections = collections,
        "variables fetched from source"
    );
}

/// Log the outcome of the category filter.
pub fn collections_filtered(category: ExportCategory, retained: usize, dropped: usize) {
    tracing::debug!(
        event = "collections_filtered",
        category = %category,
        retained = retained,
        dropped = dropped,
        "collections filtered"
    );
}

/// Log a completed export. `digest` identifies the payload so two exports can
/// be compared from logs alone.
pub fn export_completed(category: ExportCategory, count: usize, bytes: usize, digest: &str) {
    tracing::info!(
        event = "export_completed",
        category = %category,
        count = count,
        bytes = bytes,
        digest = %digest,
        "export completed"
    );
}

/// Log a failed export.
pub fn export_failed(reason: &str) {
    tracing::error!(
        event = "export_failed",
        reason = %reason,
        "export failed"
    );
}

/// Log an inbound message that is not an export request.
pub fn message_ignored(kind: &str) {
    tracing::debug!(
        event = "message_ignored",
        kind = %kind,
        "ignoring unrelated message"
    );
}

/// Log the operations a data source advertises.
pub fn source_capabilities(capabilities: &[String]) {
    tracing::debug!(
        event = "source_capabilities",
        capabilities = ?capabilities,
        "available source operations"
    );
}
