use crate::errors::VarexResult;
use crate::models::{ExportCategory, ExportDocument, ProjectionContext, VariableSnapshot};

/// Shapes a filtered snapshot into the document that gets serialized.
pub trait IProjector: Send + Sync {
    fn project(
        &self,
        snapshot: &VariableSnapshot,
        category: ExportCategory,
        context: &ProjectionContext,
    ) -> VarexResult<ExportDocument>;
}
