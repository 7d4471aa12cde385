/// Data source errors raised while fetching variables or collections.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("{method} missing")]
    MethodUnavailable { method: String },

    #[error("{operation} failed: {reason}")]
    SourceFailed { operation: String, reason: String },
}
