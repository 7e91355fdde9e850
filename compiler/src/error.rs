use thiserror::Error;

/// Errors at the I/O and configuration boundary. Problems in enumeration
/// metadata are never errors, they are reported as diagnostics.
#[derive(Debug, Error)]
pub enum FlagExtError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Generation pass was cancelled")]
    Cancelled,

    #[error("{0} diagnostic(s) with error severity")]
    DiagnosticErrors(usize),
}
