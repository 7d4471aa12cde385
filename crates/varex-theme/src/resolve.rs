//! Default-mode value lookup with alias following.

use std::collections::HashSet;

use tracing::warn;
use varex_core::constants::MAX_ALIAS_DEPTH;
use varex_core::errors::ProjectionError;
use varex_core::models::{AliasIndex, ExportedVariable, VariableValue};

/// Resolves a variable's value in a mode, following alias chains through the
/// snapshot's alias index. Each hop reads the target in its own collection's
/// default mode.
#[derive(Debug, Clone, Copy)]
pub struct ValueResolver<'a> {
    aliases: &'a AliasIndex,
}

impl<'a> ValueResolver<'a> {
    pub fn new(aliases: &'a AliasIndex) -> Self {
        Self { aliases }
    }

    /// The concrete value of `variable` in `mode_id`.
    ///
    /// `Ok(None)` when there is no mode, no value for the mode, or an alias
    /// points at a variable that was never fetched. Chains that revisit a
    /// variable or exceed `MAX_ALIAS_DEPTH` hops are an error.
    pub fn resolve(
        &self,
        variable: &'a ExportedVariable,
        mode_id: Option<&str>,
    ) -> Result<Option<&'a VariableValue>, ProjectionError> {
        let Some(mode_id) = mode_id else {
            warn!(variable = %variable.name, "collection has no default mode");
            return Ok(None);
        };
        let Some(mut current) = variable.value_in(mode_id) else {
            warn!(variable = %variable.name, mode_id, "no value for default mode");
            return Ok(None);
        };

        let mut visited: HashSet<&str> = HashSet::from([variable.id.as_str()]);
        let mut depth = 0;
        while let VariableValue::Alias(alias) = current {
            depth += 1;
            if depth > MAX_ALIAS_DEPTH || !visited.insert(alias.id.as_str()) {
                return Err(ProjectionError::AliasCycle {
                    variable: variable.name.clone(),
                    depth,
                });
            }
            let Some(target) = self.aliases.get(&alias.id) else {
                warn!(variable = %variable.name, target = %alias.id, "alias target not found");
                return Ok(None);
            };
            let Some(value) = target
                .default_mode_id
                .as_deref()
                .and_then(|mode| target.variable.value_in(mode))
            else {
                warn!(
                    variable = %variable.name,
                    target = %target.variable.name,
                    "alias target has no default-mode value"
                );
                return Ok(None);
            };
            current = value;
        }
        Ok(Some(current))
    }
}
