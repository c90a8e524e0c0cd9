//! # Claim Submission
//!
//! Submission runs through three phases:
//!
//! ```text
//! Idle -> Validating -> Idle        (validation failed)
//!                    -> Encrypting -> Idle   (delay finished or task cancelled)
//! ```
//!
//! The encrypting phase is a simulated delay. [`simulate_submission`] wraps
//! whatever delay future the caller provides (a gloo timer in the browser, a
//! tokio sleep in tests) in an abortable task, so swapping the delay for real
//! work later keeps a cancellation point.

use crate::error::{ClaimError, Result};
use futures::future::{AbortHandle, Abortable, Aborted};
use shared::dto::claims::ClaimFormRecord;
use std::fmt;
use std::future::Future;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Encrypting {
        claim_id: String,
    },
}

impl SubmissionPhase {
    /// True while a submission owns the form. Guards against double submits.
    pub fn is_in_flight(&self) -> bool {
        !matches!(self, SubmissionPhase::Idle)
    }

    /// Claim id of the running submission.
    pub fn claim_id(&self) -> Option<&str> {
        match self {
            SubmissionPhase::Encrypting { claim_id } => Some(claim_id),
            _ => None,
        }
    }

    /// Move to `next`, rejecting transitions the state machine does not allow.
    pub fn advance(self, next: SubmissionPhase) -> Result<SubmissionPhase> {
        use SubmissionPhase::*;

        match (&self, &next) {
            (Idle, Validating)
            | (Validating, Idle)
            | (Validating, Encrypting { .. })
            | (Encrypting { .. }, Idle) => {
                log::debug!("submission phase {} -> {}", self, next);
                Ok(next)
            }
            _ => Err(ClaimError::State(format!(
                "Invalid submission transition: {} -> {}",
                self, next
            ))),
        }
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionPhase::Idle => f.write_str("Idle"),
            SubmissionPhase::Validating => f.write_str("Validating"),
            SubmissionPhase::Encrypting { claim_id } => write!(f, "Encrypting({})", claim_id),
        }
    }
}

/// What a started submission carries into its task: the assigned id and the
/// record as it was when submit was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub claim_id: String,
    pub record: ClaimFormRecord,
}

/// Result of a completed simulated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub claim_id: String,
    pub record: ClaimFormRecord,
}

impl From<SubmissionTicket> for ClaimReceipt {
    fn from(ticket: SubmissionTicket) -> Self {
        Self {
            claim_id: ticket.claim_id,
            record: ticket.record,
        }
    }
}

/// Cancels the task returned by [`simulate_submission`].
#[derive(Debug, Clone)]
pub struct SubmissionHandle {
    abort: AbortHandle,
}

impl SubmissionHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Build the encrypting-phase task. It resolves to a receipt once `delay`
/// completes, or to [`ClaimError::Cancelled`] if the handle is cancelled first.
/// Nothing runs until the returned future is polled.
pub fn simulate_submission<D>(
    ticket: SubmissionTicket,
    delay: D,
) -> (SubmissionHandle, impl Future<Output = Result<ClaimReceipt>>)
where
    D: Future<Output = ()>,
{
    let (abort, registration) = AbortHandle::new_pair();

    let task = async move {
        log::info!("encrypting claim {}", ticket.claim_id);
        match Abortable::new(delay, registration).await {
            Ok(()) => Ok(ClaimReceipt::from(ticket)),
            Err(Aborted) => {
                log::warn!("submission of claim {} cancelled", ticket.claim_id);
                Err(ClaimError::Cancelled)
            }
        }
    };

    (SubmissionHandle { abort }, task)
}
