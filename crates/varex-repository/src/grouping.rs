//! Joins variables to their collections and builds the export snapshot.

use std::collections::HashMap;

use tracing::debug;
use varex_core::models::{
    AliasIndex, AliasTarget, CollectionGroup, ExportedVariable, Variable, VariableCollection,
    VariableSnapshot,
};

use crate::filter::CollectionFilter;

/// Outcome of grouping, with the counts the caller reports.
#[derive(Debug, Clone)]
pub struct GroupingResult {
    pub snapshot: VariableSnapshot,
    pub dropped_collections: usize,
    pub orphaned_variables: usize,
}

/// The mode the projector reads for a collection: the declared default, else
/// the first declared mode, else the smallest mode id any member carries.
pub fn resolve_default_mode(
    collection: &VariableCollection,
    members: &[Variable],
) -> Option<String> {
    if let Some(mode) = collection.declared_default_mode() {
        return Some(mode.to_string());
    }
    members
        .iter()
        .flat_map(|v| v.values_by_mode.keys())
        .min()
        .cloned()
}

/// Group `variables` under `collections` (host order) and keep the groups the
/// filter accepts. The alias index covers every grouped variable, filtered or not.
///
/// Collections sharing a name collapse to the last one seen.
pub fn group_by_collection(
    variables: Vec<Variable>,
    collections: &[VariableCollection],
    filter: &CollectionFilter<'_>,
) -> GroupingResult {
    let mut by_collection: HashMap<String, Vec<Variable>> = HashMap::new();
    for variable in variables {
        by_collection
            .entry(variable.variable_collection_id.clone())
            .or_default()
            .push(variable);
    }

    let mut snapshot = VariableSnapshot::default();
    let mut aliases = AliasIndex::new();
    let mut dropped_collections = 0;

    for collection in collections {
        let members = by_collection.remove(&collection.id).unwrap_or_default();
        let default_mode_id = resolve_default_mode(collection, &members);
        let exported: Vec<ExportedVariable> =
            members.into_iter().map(ExportedVariable::from).collect();

        for variable in &exported {
            aliases.insert(AliasTarget {
                variable: variable.clone(),
                default_mode_id: default_mode_id.clone(),
            });
        }

        if !filter.accepts(&collection.name) {
            dropped_collections += 1;
            continue;
        }

        snapshot.collections.insert(
            collection.name.clone(),
            CollectionGroup {
                collection_id: collection.id.clone(),
                default_mode_id,
                variables: exported,
            },
        );
    }

    let orphaned_variables: usize = by_collection.values().map(Vec::len).sum();
    if orphaned_variables > 0 {
        debug!(
            orphaned_variables,
            "dropping variables without a matching collection"
        );
    }

    snapshot.aliases = aliases;
    GroupingResult {
        snapshot,
        dropped_collections,
        orphaned_variables,
    }
}
