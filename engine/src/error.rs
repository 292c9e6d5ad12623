use thiserror::Error;

/// Errors the engine can report. `Validation` carries the exact, stable
/// message string a caller can show to an end user; everything else is
/// an internal condition that should be logged, not displayed verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn validation(msg: &'static str) -> Self {
        EngineError::Validation(msg)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}
