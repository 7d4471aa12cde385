mod category;
mod collection;
mod document;
mod message;
mod snapshot;
mod theme;
mod variable;

pub use category::{ExportCategory, NameMatching};
pub use collection::{CollectionMode, VariableCollection};
pub use document::{ExportDocument, ProjectionContext};
pub use message::{PluginMessage, UiMessage};
pub use snapshot::{AliasIndex, AliasTarget, CollectionGroup, VariableSnapshot};
pub use theme::{FontSlot, LinkStyles, TextColour, Theme, ThemeColour};
pub use variable::{
    AliasKind, ExportedVariable, ResolvedType, Rgba, Variable, VariableAlias, VariableValue,
};
