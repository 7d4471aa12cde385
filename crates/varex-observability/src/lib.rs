//! # varex-observability
//!
//! Structured tracing for the exporter: subscriber setup driven by
//! `ObservabilityConfig`, span definitions per export stage, and named events
//! for the request lifecycle.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
