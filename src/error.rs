//! Error types for Mostrar operations.
//!
//! The rendering path itself never fails: out-of-range hyperparameters are
//! clamped, unknown model identifiers produce a placeholder scene, and a
//! malformed seed falls back to a fixed default. Errors surface only from
//! the strict `try_new` parameter constructors.

use std::fmt;

/// Main error type for Mostrar operations.
///
/// # Examples
///
/// ```
/// use mostrar::error::MostrarError;
///
/// let err = MostrarError::InvalidHyperparameter {
///     param: "k".to_string(),
///     value: "0".to_string(),
///     constraint: "1 <= k <= 25".to_string(),
/// };
/// assert!(err.to_string().contains("invalid hyperparameter"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MostrarError {
    /// Hyperparameter value outside its declared range.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Model family identifier not recognized.
    UnknownModel {
        /// The identifier that failed to parse
        id: String,
    },
}

impl fmt::Display for MostrarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid hyperparameter: {param} = {value} violates {constraint}"
                )
            }
            Self::UnknownModel { id } => {
                write!(f, "unknown model family: {id}")
            }
        }
    }
}

impl std::error::Error for MostrarError {}

/// Result type alias for Mostrar operations.
pub type Result<T> = std::result::Result<T, MostrarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hyperparameter_display() {
        let err = MostrarError::InvalidHyperparameter {
            param: "trees".to_string(),
            value: "5000".to_string(),
            constraint: "10 <= trees <= 200".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("trees"));
        assert!(msg.contains("5000"));
        assert!(msg.contains("10 <= trees <= 200"));
    }

    #[test]
    fn test_unknown_model_display() {
        let err = MostrarError::UnknownModel {
            id: "xgboost".to_string(),
        };
        assert!(err.to_string().contains("xgboost"));
    }
}
