//! # varex-repository
//!
//! Variable repository access: fetches collections and variables from an
//! `IVariableSource` concurrently, groups variables under their owning
//! collection, resolves each collection's default mode once, and applies the
//! category filter.

pub mod engine;
pub mod filter;
pub mod grouping;

pub use engine::VariableRepository;
pub use filter::CollectionFilter;
