//! Error types for radiance.
//!
//! The error taxonomy is intentionally narrow. List construction never fails,
//! and panics raised by caller-supplied closures are never caught or wrapped.
//! The only failures reported through `Result` are:
//!
//! - dispatching an operator symbol that is not part of the closed
//!   [`BinaryOperator`](crate::ops::BinaryOperator) set
//! - forcing a deferred value whose initializer previously panicked

use thiserror::Error;

/// Represents errors that can occur in radiance.
///
/// # Examples
///
/// ```rust
/// use radiance::error::RadianceError;
///
/// let error = RadianceError::UnsupportedOperator("%".to_string());
/// assert_eq!(error.to_string(), "unsupported operator: `%`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadianceError {
    /// The symbol does not name one of the supported binary operators.
    #[error("unsupported operator: `{0}`")]
    UnsupportedOperator(String),

    /// The deferred computation panicked during a previous evaluation.
    #[error("deferred value has been poisoned by a panicking initializer")]
    PoisonedThunk,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unsupported_operator_display() {
        let error = RadianceError::UnsupportedOperator("^".to_string());
        assert_eq!(error.to_string(), "unsupported operator: `^`");
    }

    #[rstest]
    fn test_poisoned_thunk_display() {
        let error = RadianceError::PoisonedThunk;
        assert_eq!(
            error.to_string(),
            "deferred value has been poisoned by a panicking initializer"
        );
    }

    #[rstest]
    fn test_error_trait_object() {
        let error = RadianceError::PoisonedThunk;
        let _: &dyn std::error::Error = &error;
    }

    #[rstest]
    fn test_error_equality() {
        assert_eq!(
            RadianceError::UnsupportedOperator("%".to_string()),
            RadianceError::UnsupportedOperator("%".to_string())
        );
        assert_ne!(
            RadianceError::UnsupportedOperator("%".to_string()),
            RadianceError::PoisonedThunk
        );
    }
}
