use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
}
