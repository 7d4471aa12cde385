use std::sync::Arc;

use crate::errors::VarexResult;
use crate::models::PluginMessage;

/// Outbound channel to the UI panel.
pub trait IMessageSink: Send + Sync {
    fn post_message(&self, message: &PluginMessage) -> VarexResult<()>;
}

impl<T: IMessageSink> IMessageSink for Arc<T> {
    fn post_message(&self, message: &PluginMessage) -> VarexResult<()> {
        (**self).post_message(message)
    }
}
