//! VariableRepository: fetches from the data source and builds the snapshot.

use tracing::{debug, Instrument};
use varex_core::config::ThemeConfig;
use varex_core::errors::VarexResult;
use varex_core::models::{ExportCategory, Variable, VariableCollection, VariableSnapshot};
use varex_core::traits::IVariableSource;
use varex_observability::fetch_span;
use varex_observability::tracing_setup::events;

use crate::filter::CollectionFilter;
use crate::grouping;

/// Read access to the variables of one document.
///
/// Holds no state between calls: every `load` fetches afresh.
pub struct VariableRepository<'a, S: IVariableSource> {
    source: &'a S,
    theme: &'a ThemeConfig,
}

impl<'a, S: IVariableSource> VariableRepository<'a, S> {
    pub fn new(source: &'a S, theme: &'a ThemeConfig) -> Self {
        Self { source, theme }
    }

    /// Fetch variables and collections concurrently. Either failure aborts
    /// the whole fetch.
    pub async fn fetch_all(&self) -> VarexResult<(Vec<Variable>, Vec<VariableCollection>)> {
        let (variables, collections) = async {
            tokio::try_join!(
                self.source.local_variables(),
                self.source.local_collections()
            )
        }
        .instrument(fetch_span!())
        .await?;

        events::variables_fetched(variables.len(), collections.len());
        Ok((variables, collections))
    }

    /// Build the snapshot for `category`.
    pub async fn load(&self, category: ExportCategory) -> VarexResult<VariableSnapshot> {
        let (variables, collections) = self.fetch_all().await?;

        let filter = CollectionFilter::new(category, self.theme);
        let result = grouping::group_by_collection(variables, &collections, &filter);

        events::collections_filtered(
            category,
            result.snapshot.collections.len(),
            result.dropped_collections,
        );
        debug!(
            retained_variables = result.snapshot.variable_count(),
            orphaned_variables = result.orphaned_variables,
            "snapshot built"
        );

        Ok(result.snapshot)
    }
}
