use thiserror::Error;

/// Errors raised while resolving user-supplied drill settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    #[error("unknown practice mode '{0}'")]
    UnknownMode(String),
    #[error("practice mode index {index} is out of range (1-{count})")]
    ModeIndexOutOfRange { index: usize, count: usize },
    #[error("{name} must be greater than zero")]
    ZeroDelay { name: &'static str },
}
