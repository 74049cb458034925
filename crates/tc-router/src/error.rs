//! Router error type.

use thiserror::Error;

use tc_core::CoreError;

/// Errors produced by `tc-router`.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("stop {0:?} not found")]
    UnknownStop(String),

    #[error("no route from {from:?} to {to:?}")]
    Unreachable { from: String, to: String },

    #[error("transit graph too large: {0} IDs exhausted")]
    GraphTooLarge(&'static str),

    #[error("invalid routing settings: {0}")]
    Settings(#[from] CoreError),
}

pub type RouterResult<T> = Result<T, RouterError>;
