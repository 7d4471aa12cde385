mod projection_error;
mod retrieval_error;

pub use projection_error::ProjectionError;
pub use retrieval_error::RetrievalError;

/// Top-level error for every varex operation.
#[derive(Debug, thiserror::Error)]
pub enum VarexError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("unknown export category '{category}'")]
    UnknownCategory { category: String },

    #[error("export category is required")]
    MissingCategory,

    #[error("malformed message: {reason}")]
    MalformedMessage { reason: String },

    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("message sink rejected message: {reason}")]
    Sink { reason: String },
}

impl From<serde_json::Error> for VarexError {
    fn from(err: serde_json::Error) -> Self {
        VarexError::Serialization {
            reason: err.to_string(),
        }
    }
}

pub type VarexResult<T> = Result<T, VarexError>;
