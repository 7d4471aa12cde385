//! # varex-theme
//!
//! Projects a filtered variable snapshot into its export shape. The `all`
//! category passes collections through unchanged; the `theme` category maps
//! known collections and variable names onto the fixed `Theme` schema.

pub mod color;
pub mod engine;
pub mod naming;
pub mod resolve;
pub mod rules;

pub use color::rgb_to_hex;
pub use engine::ThemeProjector;
pub use naming::{display_name, NameMatcher};
