//! Span definitions per export stage: request, fetch, projection.

/// Create a span covering one export request.
#[macro_export]
macro_rules! export_span {
    ($category:expr) => {
        tracing::info_span!("varex.export", category = %$category)
    };
}

/// Create a span covering the concurrent fetch from the data source.
#[macro_export]
macro_rules! fetch_span {
    () => {
        tracing::debug_span!("varex.fetch")
    };
}

/// Create a span covering projection of a snapshot.
#[macro_export]
macro_rules! projection_span {
    ($category:expr, $collections:expr) => {
        tracing::debug_span!(
            "varex.projection",
            category = %$category,
            collections = $collections
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EXPORT: &str = "varex.export";
    pub const FETCH: &str = "varex.fetch";
    pub const PROJECTION: &str = "varex.projection";
}
