//! Error types for property access, capture and replay.

use thiserror::Error;

/// Failure reading or writing a single member of a property bag.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("`{0}` is not a property of this object")]
    Unknown(String),

    #[error("`{0}` is read-only")]
    ReadOnly(String),

    #[error("`{name}` expects {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: String,
    },

    #[error("`{value}` is not a valid option for `{name}`")]
    InvalidEnum { name: String, value: String },

    #[error("`{name}` expects {expected} items, got {found}")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("could not duplicate value: {0}")]
    DuplicationFailed(String),
}

impl PropertyError {
    pub fn mismatch(name: &str, expected: &'static str, found: impl ToString) -> Self {
        Self::TypeMismatch {
            name: name.to_string(),
            expected,
            found: found.to_string(),
        }
    }
}

/// Why a single property was left out of a capture or replay.
///
/// None of these abort the surrounding operation; they are collected into
/// reports and logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("listed in the skip set")]
    SkipListed,

    #[error("member is a method")]
    Callable,

    #[error("unreadable: {0}")]
    Unreadable(PropertyError),

    #[error("value has no portable encoding")]
    Unrepresentable,

    #[error("unwritable: {0}")]
    Unwritable(PropertyError),

    #[error("{kind} `{name}` not found at destination")]
    UnresolvedReference { kind: String, name: String },
}
