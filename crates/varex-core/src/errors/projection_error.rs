/// Errors raised while shaping a snapshot into an export document.
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("variable '{variable}': expected {expected} value, found {found}")]
    UnexpectedValueShape {
        variable: String,
        expected: String,
        found: String,
    },

    #[error("variable '{variable}': channel {channel} is not a finite number")]
    InvalidChannel { variable: String, channel: char },

    #[error("variable '{variable}': alias chain does not terminate after {depth} hops")]
    AliasCycle { variable: String, depth: usize },
}
