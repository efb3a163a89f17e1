//! Base error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers the failures
//! that can happen inside `dr-core` itself (configuration loading).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `dr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
