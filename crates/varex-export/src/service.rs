//! ExportService: handles inbound requests and reports to the message sink.

use tracing::{debug, Instrument};
use varex_core::config::VarexConfig;
use varex_core::constants::{ERROR_MESSAGE_PREFIX, EXPORT_VARIABLES_MESSAGE};
use varex_core::errors::{VarexError, VarexResult};
use varex_core::models::{ExportCategory, PluginMessage, ProjectionContext, UiMessage};
use varex_core::traits::{IMessageSink, IProjector, IVariableSource};
use varex_observability::export_span;
use varex_observability::tracing_setup::events;
use varex_repository::VariableRepository;
use varex_theme::ThemeProjector;

use crate::payload::ExportPayload;

/// Owns the data source, the sink and the configuration for one document.
///
/// Each request fetches afresh; nothing is cached between requests.
pub struct ExportService<S: IVariableSource, K: IMessageSink> {
    config: VarexConfig,
    source: S,
    sink: K,
    projector: ThemeProjector,
}

impl<S: IVariableSource, K: IMessageSink> ExportService<S, K> {
    pub fn new(config: VarexConfig, source: S, sink: K) -> Self {
        let projector = ThemeProjector::new(config.theme.clone());
        Self {
            config,
            source,
            sink,
            projector,
        }
    }

    /// Service with the default configuration.
    pub fn with_defaults(source: S, sink: K) -> Self {
        Self::new(VarexConfig::default(), source, sink)
    }

    pub fn config(&self) -> &VarexConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Load, project and serialize one export. Posts nothing.
    pub async fn export(&self, category: ExportCategory) -> VarexResult<ExportPayload> {
        async {
            events::export_requested(category);
            events::source_capabilities(&self.source.capabilities());

            let repository = VariableRepository::new(&self.source, &self.config.theme);
            let snapshot = repository.load(category).await?;

            let context = ProjectionContext::new(self.source.document_name());
            let document = self.projector.project(&snapshot, category, &context)?;
            let payload = ExportPayload::new(&document, snapshot.variable_count(), category)?;

            events::export_completed(
                category,
                payload.count,
                payload.data.len(),
                &payload.digest(),
            );
            Ok::<_, VarexError>(payload)
        }
        .instrument(export_span!(category))
        .await
    }

    /// Handle a typed inbound message. Exactly one outbound message is posted.
    ///
    /// Export failures become an error message and return `Ok`; the only
    /// error returned is a sink that refuses the outbound message.
    pub async fn handle_message(&self, message: UiMessage) -> VarexResult<()> {
        match message {
            UiMessage::ExportVariables { category } => {
                let result = match self.config.export.resolve_category(category.as_deref()) {
                    Ok(category) => self.export(category).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(payload) => self.post_success(&payload),
                    Err(err) => self.post_failure(&err),
                }
            }
        }
    }

    /// Handle an inbound message given as JSON text.
    ///
    /// Messages of any other `type` are ignored. Text that is not a JSON
    /// object with a string `type`, or an export request with a malformed
    /// body, is reported as an error message.
    pub async fn handle_json(&self, raw: &str) -> VarexResult<()> {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => return self.post_failure(&malformed(e.to_string())),
        };
        let Some(kind) = value.get("type").and_then(|t| t.as_str()) else {
            return self.post_failure(&malformed("missing message type".to_string()));
        };
        if kind != EXPORT_VARIABLES_MESSAGE {
            events::message_ignored(kind);
            return Ok(());
        }

        match serde_json::from_value::<UiMessage>(value) {
            Ok(message) => self.handle_message(message).await,
            Err(e) => self.post_failure(&malformed(e.to_string())),
        }
    }

    fn post_success(&self, payload: &ExportPayload) -> VarexResult<()> {
        self.sink.post_message(&payload.to_message()).inspect_err(|err| {
            events::export_failed(&err.to_string());
        })
    }

    fn post_failure(&self, err: &VarexError) -> VarexResult<()> {
        events::export_failed(&err.to_string());
        let message = error_message(err);
        debug!("posting error message");
        self.sink.post_message(&message)
    }
}

/// The outbound message reporting `err`.
pub fn error_message(err: &VarexError) -> PluginMessage {
    PluginMessage::Error {
        message: format!("{ERROR_MESSAGE_PREFIX}{err}"),
    }
}

fn malformed(reason: String) -> VarexError {
    VarexError::MalformedMessage { reason }
}
