//! # Claim Errors
//!
//! [`ClaimError`] covers every way a dashboard action can be refused. The
//! web layer turns each one into an error toast, so the `Display` text is the
//! message the user sees.
//!
//! ## Error Categories
//!
//! - **Validation**: a required form field is empty
//! - **NotConnected**: an action needs a connected wallet
//! - **UnknownField**: a form key outside the claim record
//! - **State**: an illegal submission phase transition
//! - **Payout**: a payout console precondition failed
//! - **Cancelled**: the simulated submission was aborted
//!
//! ```rust
//! use lib_claims::error::ClaimError;
//!
//! let err = ClaimError::NotConnected;
//! assert_eq!(err.to_string(), "Please connect your wallet first");
//! ```

use shared::dto::claims::ClaimField;
use thiserror::Error;

/// A required claim field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: ClaimField,
    pub message: String,
}

impl ValidationError {
    pub fn required(field: ClaimField) -> Self {
        Self {
            field,
            message: field.required_message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    /// First failing required field of the claim form.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Please connect your wallet first")]
    NotConnected,

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Submission phase moved somewhere it cannot go.
    #[error("State error: {0}")]
    State(String),

    /// Payout console precondition, carrying the message shown to the user.
    #[error("{0}")]
    Payout(String),

    #[error("Submission cancelled")]
    Cancelled,
}

/// Convenience type alias for `Result<T, ClaimError>`.
pub type Result<T> = std::result::Result<T, ClaimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err: ClaimError = ValidationError::required(ClaimField::Description).into();
        assert_eq!(err.to_string(), "Incident description is required");
    }

    #[test]
    fn test_state_error_prefix() {
        let err = ClaimError::State("Idle -> Idle".to_string());
        assert_eq!(err.to_string(), "State error: Idle -> Idle");
    }
}
