//! Style input errors

use thiserror::Error;

/// Rejected style input. Out-of-range numbers are clamped, not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("invalid color {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),
    #[error("unknown style field {0:?}")]
    UnknownField(String),
    #[error("unknown {field} value {value:?}")]
    UnknownValue { field: &'static str, value: String },
    #[error("{field} expects a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}
