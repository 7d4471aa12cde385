//! Test fixtures for varex: golden dataset loading, an in-memory data source,
//! a recording message sink, and builders for host-shaped variables.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use varex_core::errors::{RetrievalError, VarexError, VarexResult};
use varex_core::models::{
    PluginMessage, ResolvedType, Rgba, Variable, VariableAlias, VariableCollection, VariableValue,
};
use varex_core::traits::{IMessageSink, IVariableSource};

/// Mode id used by the builders below.
pub const DEFAULT_MODE: &str = "1:0";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// The host-side half of a fixture: what the data source returns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceFixture {
    pub document_name: String,
    pub collections: Vec<VariableCollection>,
    pub variables: Vec<Variable>,
}

// ── In-memory data source ─────────────────────────────────────────────────

/// Which fetch, if any, the in-memory source fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFailure {
    Variables,
    Collections,
    MissingVariablesMethod,
}

/// `IVariableSource` backed by plain vectors.
#[derive(Debug, Default)]
pub struct InMemorySource {
    document_name: String,
    collections: Vec<VariableCollection>,
    variables: Vec<Variable>,
    failure: Option<SourceFailure>,
    variable_calls: AtomicUsize,
    collection_calls: AtomicUsize,
}

impl InMemorySource {
    pub fn new(document_name: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            ..Self::default()
        }
    }

    pub fn from_fixture(fixture: SourceFixture) -> Self {
        Self {
            document_name: fixture.document_name,
            collections: fixture.collections,
            variables: fixture.variables,
            ..Self::default()
        }
    }

    /// Load a `SourceFixture` JSON file (or the source half of a golden file).
    pub fn load(relative_path: &str) -> Self {
        Self::from_fixture(load_fixture(relative_path))
    }

    pub fn with_collection(mut self, collection: VariableCollection) -> Self {
        self.collections.push(collection);
        self
    }

    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn failing(mut self, failure: SourceFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn variable_calls(&self) -> usize {
        self.variable_calls.load(Ordering::SeqCst)
    }

    pub fn collection_calls(&self) -> usize {
        self.collection_calls.load(Ordering::SeqCst)
    }
}

impl IVariableSource for InMemorySource {
    async fn local_variables(&self) -> VarexResult<Vec<Variable>> {
        self.variable_calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(SourceFailure::Variables) => Err(RetrievalError::SourceFailed {
                operation: "local_variables".to_string(),
                reason: "host rejected the query".to_string(),
            }
            .into()),
            Some(SourceFailure::MissingVariablesMethod) => Err(RetrievalError::MethodUnavailable {
                method: "getLocalVariablesAsync".to_string(),
            }
            .into()),
            _ => Ok(self.variables.clone()),
        }
    }

    async fn local_collections(&self) -> VarexResult<Vec<VariableCollection>> {
        self.collection_calls.fetch_add(1, Ordering::SeqCst);
        match self.failure {
            Some(SourceFailure::Collections) => Err(RetrievalError::SourceFailed {
                operation: "local_collections".to_string(),
                reason: "host rejected the query".to_string(),
            }
            .into()),
            _ => Ok(self.collections.clone()),
        }
    }

    fn document_name(&self) -> String {
        self.document_name.clone()
    }

    fn capabilities(&self) -> Vec<String> {
        let mut ops = vec!["local_collections".to_string()];
        if self.failure != Some(SourceFailure::MissingVariablesMethod) {
            ops.push("local_variables".to_string());
        }
        ops
    }
}

// ── Recording sink ────────────────────────────────────────────────────────

/// `IMessageSink` that keeps every posted message.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<PluginMessage>>,
    reject: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose channel is closed: every post fails.
    pub fn rejecting() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    pub fn messages(&self) -> Vec<PluginMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                PluginMessage::Error { message } => Some(message),
                PluginMessage::ExportJson { .. } => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<PluginMessage> {
        self.messages()
            .into_iter()
            .filter(|m| !m.is_error())
            .collect()
    }
}

impl IMessageSink for RecordingSink {
    fn post_message(&self, message: &PluginMessage) -> VarexResult<()> {
        if self.reject {
            return Err(VarexError::Sink {
                reason: "ui channel closed".to_string(),
            });
        }
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// ── Builders ──────────────────────────────────────────────────────────────

/// A collection with a single default mode `1:0`.
pub fn collection(id: &str, name: &str) -> VariableCollection {
    VariableCollection::new(id, name).with_mode(DEFAULT_MODE, "Mode 1")
}

/// A COLOR variable with one value in the default mode.
pub fn color_var(id: &str, name: &str, collection_id: &str, r: f64, g: f64, b: f64) -> Variable {
    Variable::new(id, name, ResolvedType::Color, collection_id)
        .with_value(DEFAULT_MODE, VariableValue::Color(Rgba::rgba(r, g, b, 1.0)))
}

/// A STRING variable with one value in the default mode.
pub fn string_var(id: &str, name: &str, collection_id: &str, value: &str) -> Variable {
    Variable::new(id, name, ResolvedType::String, collection_id)
        .with_value(DEFAULT_MODE, VariableValue::String(value.to_string()))
}

/// A variable of `resolved_type` whose default-mode value aliases `target_id`.
pub fn alias_var(
    id: &str,
    name: &str,
    collection_id: &str,
    resolved_type: ResolvedType,
    target_id: &str,
) -> Variable {
    Variable::new(id, name, resolved_type, collection_id)
        .with_value(DEFAULT_MODE, VariableValue::Alias(VariableAlias::to(target_id)))
}
