//! # varex-core
//!
//! Foundation crate for the varex design variable exporter.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VarexConfig;
pub use errors::{VarexError, VarexResult};
pub use models::{ExportCategory, ResolvedType, Theme, Variable, VariableCollection, VariableValue};
