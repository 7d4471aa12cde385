//! Projection rules, one per theme collection.
//!
//! Each rule reads a single collection group and writes its part of the
//! theme. Variables whose resolved type the rule does not handle are skipped.

pub mod background_colours;
pub mod fonts;
pub mod link_colours;
pub mod link_decoration;
pub mod text_colours;

use varex_core::errors::ProjectionError;
use varex_core::models::{AliasIndex, ExportedVariable, VariableValue};

use crate::color;
use crate::naming::{self, NameMatcher};
use crate::resolve::ValueResolver;

/// Shared state handed to every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub matcher: NameMatcher,
    pub strip_path_prefix: bool,
    resolver: ValueResolver<'a>,
}

impl<'a> RuleContext<'a> {
    pub fn new(matcher: NameMatcher, strip_path_prefix: bool, aliases: &'a AliasIndex) -> Self {
        Self {
            matcher,
            strip_path_prefix,
            resolver: ValueResolver::new(aliases),
        }
    }

    pub fn display_name<'n>(&self, variable: &'n ExportedVariable) -> &'n str {
        naming::display_name(&variable.name, self.strip_path_prefix)
    }

    /// Hex color of `variable` in `mode_id`, if it has one.
    pub fn colour_of(
        &self,
        variable: &'a ExportedVariable,
        mode_id: Option<&str>,
    ) -> Result<Option<String>, ProjectionError> {
        match self.resolver.resolve(variable, mode_id)? {
            None => Ok(None),
            Some(VariableValue::Color(rgba)) => color::decode(&variable.name, rgba).map(Some),
            Some(other) => Err(unexpected(variable, "color", other)),
        }
    }

    /// String value of `variable` in `mode_id`, if it has one.
    pub fn string_of(
        &self,
        variable: &'a ExportedVariable,
        mode_id: Option<&str>,
    ) -> Result<Option<String>, ProjectionError> {
        match self.resolver.resolve(variable, mode_id)? {
            None => Ok(None),
            Some(VariableValue::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(unexpected(variable, "string", other)),
        }
    }
}

fn unexpected(
    variable: &ExportedVariable,
    expected: &str,
    found: &VariableValue,
) -> ProjectionError {
    ProjectionError::UnexpectedValueShape {
        variable: variable.name.clone(),
        expected: expected.to_string(),
        found: found.shape().to_string(),
    }
}
