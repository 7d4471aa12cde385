use std::collections::{BTreeMap, HashMap};

use super::variable::ExportedVariable;

/// Variables grouped under one collection, with the mode the projector reads.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionGroup {
    pub collection_id: String,
    /// Mode resolved once for the whole collection; `None` when the collection
    /// declares no modes and none of its variables carry a value.
    pub default_mode_id: Option<String>,
    pub variables: Vec<ExportedVariable>,
}

/// An alias target: the variable plus the mode its own collection resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTarget {
    pub variable: ExportedVariable,
    pub default_mode_id: Option<String>,
}

/// Every fetched variable by id, independent of the category filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasIndex {
    entries: HashMap<String, AliasTarget>,
}

impl AliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, target: AliasTarget) {
        self.entries.insert(target.variable.id.clone(), target);
    }

    pub fn get(&self, variable_id: &str) -> Option<&AliasTarget> {
        self.entries.get(variable_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collection name → variables, built fresh for one export and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableSnapshot {
    pub collections: BTreeMap<String, CollectionGroup>,
    pub aliases: AliasIndex,
}

impl VariableSnapshot {
    /// Number of retained variables, flattened across collections.
    pub fn variable_count(&self) -> usize {
        self.collections.values().map(|g| g.variables.len()).sum()
    }

    pub fn collection(&self, name: &str) -> Option<&CollectionGroup> {
        self.collections.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// The pass-through export shape: collection name → variables.
    pub fn to_export_map(&self) -> BTreeMap<String, Vec<ExportedVariable>> {
        self.collections
            .iter()
            .map(|(name, group)| (name.clone(), group.variables.clone()))
            .collect()
    }
}
