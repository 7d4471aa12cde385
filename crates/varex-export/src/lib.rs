//! # varex-export
//!
//! The request/response surface of the exporter. `ExportService` takes an
//! inbound export request, loads the snapshot through the repository, projects
//! it, serializes the document, and posts exactly one outbound message.

pub mod payload;
pub mod service;

pub use payload::ExportPayload;
pub use service::ExportService;
