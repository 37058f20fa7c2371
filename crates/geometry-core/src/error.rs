use thiserror::Error;

/// Failures turning DOM attribute strings into typed tool-panel values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("unknown color `{0}`")]
    UnknownColor(String),
    #[error("invalid slider value `{0}`")]
    InvalidNumber(String),
}
