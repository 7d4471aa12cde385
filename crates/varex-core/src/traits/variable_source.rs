use std::sync::Arc;

use crate::errors::VarexResult;
use crate::models::{Variable, VariableCollection};

/// Read-only query interface of the design-tool host.
///
/// The two fetches are independent and may be awaited concurrently.
pub trait IVariableSource: Send + Sync {
    /// Every local variable in the document.
    async fn local_variables(&self) -> VarexResult<Vec<Variable>>;

    /// Every local variable collection in the document.
    async fn local_collections(&self) -> VarexResult<Vec<VariableCollection>>;

    /// Name of the document's root node.
    fn document_name(&self) -> String;

    /// Operations the host advertises, for diagnostics only.
    fn capabilities(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Blanket impl: `Arc<T>` implements `IVariableSource` by delegating to the inner `T`.
impl<T: IVariableSource> IVariableSource for Arc<T> {
    async fn local_variables(&self) -> VarexResult<Vec<Variable>> {
        (**self).local_variables().await
    }

    async fn local_collections(&self) -> VarexResult<Vec<VariableCollection>> {
        (**self).local_collections().await
    }

    fn document_name(&self) -> String {
        (**self).document_name()
    }

    fn capabilities(&self) -> Vec<String> {
        (**self).capabilities()
    }
}
