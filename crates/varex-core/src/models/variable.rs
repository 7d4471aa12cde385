use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The type a variable resolves to, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum ResolvedType {
    Color,
    String,
    Float,
    Boolean,
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolvedType::Color => "COLOR",
            ResolvedType::String => "STRING",
            ResolvedType::Float => "FLOAT",
            ResolvedType::Boolean => "BOOLEAN",
        };
        f.write_str(name)
    }
}

/// Normalized RGB(A) color. Channels are floats in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rgba {
    #[serde(serialize_with = "serialize_number")]
    pub r: f64,
    #[serde(serialize_with = "serialize_number")]
    pub g: f64,
    #[serde(serialize_with = "serialize_number")]
    pub b: f64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_number"
    )]
    #[ts(optional)]
    pub a: Option<f64>,
}

impl Rgba {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }
}

/// Marker for the `type` field of an alias value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AliasKind {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// A reference to another variable by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: AliasKind,
    pub id: String,
}

impl VariableAlias {
    pub fn to(id: impl Into<String>) -> Self {
        Self {
            kind: AliasKind::VariableAlias,
            id: id.into(),
        }
    }
}

/// A single per-mode value. The wire format carries no discriminant, so the
/// variants are tried in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum VariableValue {
    Color(Rgba),
    Alias(VariableAlias),
    Boolean(bool),
    #[serde(serialize_with = "serialize_number")]
    Float(f64),
    String(String),
}

/// Write whole numbers without a fractional part (`16`, not `16.0`), the way
/// the host serializes them.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_optional_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_number(v, serializer),
        None => serializer.serialize_none(),
    }
}

impl VariableValue {
    /// Short label of the value's shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            VariableValue::Color(_) => "color",
            VariableValue::Alias(_) => "alias",
            VariableValue::Boolean(_) => "boolean",
            VariableValue::Float(_) => "float",
            VariableValue::String(_) => "string",
        }
    }
}

/// A variable as supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Variable {
    pub name: String,
    pub id: String,
    pub resolved_type: ResolvedType,
    #[serde(default)]
    pub values_by_mode: BTreeMap<String, VariableValue>,
    pub variable_collection_id: String,
}

impl Variable {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        resolved_type: ResolvedType,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            resolved_type,
            values_by_mode: BTreeMap::new(),
            variable_collection_id: collection_id.into(),
        }
    }

    /// Builder-style helper to set the value for one mode.
    pub fn with_value(mut self, mode_id: impl Into<String>, value: VariableValue) -> Self {
        self.values_by_mode.insert(mode_id.into(), value);
        self
    }
}

/// The exported form of a variable: host-specific fields are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportedVariable {
    pub name: String,
    pub id: String,
    pub resolved_type: ResolvedType,
    pub values_by_mode: BTreeMap<String, VariableValue>,
}

impl ExportedVariable {
    pub fn value_in(&self, mode_id: &str) -> Option<&VariableValue> {
        self.values_by_mode.get(mode_id)
    }
}

impl From<Variable> for ExportedVariable {
    fn from(variable: Variable) -> Self {
        Self {
            name: variable.name,
            id: variable.id,
            resolved_type: variable.resolved_type,
            values_by_mode: variable.values_by_mode,
        }
    }
}
