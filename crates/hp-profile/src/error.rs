//! Profile-specific error types.

use hp_core::HpError;
use thiserror::Error;

/// Malformed required input. Optional fields never produce these; they
/// degrade to "feature absent" instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// A required or supplied numeric field is NaN or infinite, or a running
    /// total along the chain overflows.
    #[error("Element '{id}': {field} is not finite ({value})")]
    NonFinite {
        id: String,
        field: &'static str,
        value: f64,
    },

    /// A connection declares a negative length.
    #[error("Connection '{id}': length must be non-negative (got {length})")]
    NegativeLength { id: String, length: f64 },

    /// Viewport or scale configuration cannot produce a layout.
    #[error("Invalid viewport: {what} = {value}")]
    InvalidViewport { what: &'static str, value: f64 },
}

impl ProfileError {
    /// Attach the offending element id to a core numeric error.
    pub(crate) fn at(id: &str, err: HpError) -> Self {
        match err {
            HpError::NonFinite { what, value } => ProfileError::NonFinite {
                id: id.to_string(),
                field: what,
                value,
            },
        }
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;
