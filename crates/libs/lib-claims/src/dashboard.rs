//! # Dashboard State
//!
//! The single state object behind the dashboard page. Every transition takes
//! the state by value and returns the next one, so the render layer only ever
//! swaps whole values and a refused action can hand back the untouched input.

use crate::config::DashboardConfig;
use crate::connection::ConnectionState;
use crate::error::{ClaimError, Result};
use crate::form;
use crate::notify::Notification;
use crate::payout::{PayoutConsole, PayoutField};
use crate::submission::{ClaimReceipt, SubmissionPhase, SubmissionTicket};
use chrono::{DateTime, Utc};
use shared::dto::claims::{format_claim_id, sample_claims, ClaimField, ClaimFormRecord};

/// Outcome of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Encrypting phase entered; run the ticket through the submission task.
    Started {
        ticket: SubmissionTicket,
        notification: Notification,
    },
    /// A submission is already in flight.
    Ignored,
    /// Not connected or the form is incomplete. The state was not changed.
    Rejected(ClaimError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub form: ClaimFormRecord,
    pub connection: ConnectionState,
    pub phase: SubmissionPhase,
    /// Display-only unmasking of the identity fields.
    pub show_sensitive: bool,
    pub payout: PayoutConsole,
    next_claim_number: u32,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            form: ClaimFormRecord::sample(),
            connection: ConnectionState::default(),
            phase: SubmissionPhase::Idle,
            show_sensitive: false,
            payout: PayoutConsole::new(config),
            next_claim_number: sample_claims().len() as u32 + 1,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Submit is enabled exactly when connected and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.is_connected() && !self.phase.is_in_flight()
    }

    pub fn toggle_connection(mut self) -> (Self, Notification) {
        let (connection, notification) = self.connection.toggle();
        self.connection = connection;
        (self, notification)
    }

    pub fn toggle_sensitive(mut self) -> Self {
        self.show_sensitive = !self.show_sensitive;
        self
    }

    pub fn set_field(mut self, field: ClaimField, value: impl Into<String>) -> Self {
        self.form = form::set_field(self.form, field, value);
        self
    }

    pub fn set_field_by_key(mut self, key: &str, value: impl Into<String>) -> Result<Self> {
        self.form = form::set_field_by_key(self.form, key, value)?;
        Ok(self)
    }

    /// Validate and, if everything is in order, enter the encrypting phase.
    pub fn begin_submit(self) -> (Self, SubmitOutcome) {
        if self.phase.is_in_flight() {
            log::debug!("submit ignored: {} already in flight", self.phase);
            return (self, SubmitOutcome::Ignored);
        }

        let mut next = self.clone();
        match next.start_submission() {
            Ok(ticket) => {
                let notification =
                    Notification::claim_encrypting(&ticket.claim_id, ticket.record.claim_type());
                (next, SubmitOutcome::Started { ticket, notification })
            }
            Err(err) => {
                log::warn!("submit rejected: {}", err);
                (self, SubmitOutcome::Rejected(err))
            }
        }
    }

    fn start_submission(&mut self) -> Result<SubmissionTicket> {
        if !self.is_connected() {
            return Err(ClaimError::NotConnected);
        }

        self.phase = std::mem::take(&mut self.phase).advance(SubmissionPhase::Validating)?;
        if let Some(err) = form::first_validation_error(&self.form) {
            return Err(err.into());
        }

        let claim_id = format_claim_id(self.next_claim_number);
        self.next_claim_number += 1;
        self.phase = std::mem::take(&mut self.phase).advance(SubmissionPhase::Encrypting {
            claim_id: claim_id.clone(),
        })?;

        Ok(SubmissionTicket {
            claim_id,
            record: self.form.clone(),
        })
    }

    /// Finish the running submission: clear the incident fields and go idle.
    pub fn complete_submit(mut self, receipt: &ClaimReceipt) -> Result<(Self, Notification)> {
        if self.phase.claim_id() != Some(receipt.claim_id.as_str()) {
            return Err(ClaimError::State(format!(
                "No submission in flight for {} (phase {})",
                receipt.claim_id, self.phase
            )));
        }

        self.phase = std::mem::take(&mut self.phase).advance(SubmissionPhase::Idle)?;
        self.form = form::reset_after_submit(self.form);
        log::info!("claim {} submitted", receipt.claim_id);

        Ok((self, Notification::claim_submitted(&receipt.claim_id)))
    }

    /// Drop a cancelled submission. The form is left as it is.
    pub fn abort_submit(mut self) -> Self {
        if self.phase.is_in_flight() {
            log::debug!("aborting submission in phase {}", self.phase);
            self.phase = SubmissionPhase::Idle;
        }
        self
    }

    pub fn set_payout_field(mut self, field: PayoutField, value: impl Into<String>) -> Self {
        self.payout = self.payout.set_field(field, value);
        self
    }

    pub fn create_payout_request(mut self, now: DateTime<Utc>) -> Result<(Self, Notification)> {
        let connected = self.is_connected();
        let (payout, notification) = self.payout.create_request(connected, now)?;
        self.payout = payout;
        Ok((self, notification))
    }

    pub fn add_payout_recipient(mut self) -> Result<(Self, Notification)> {
        let (payout, notification) = self.payout.add_recipient()?;
        self.payout = payout;
        Ok((self, notification))
    }

    pub fn process_payout(mut self) -> Result<(Self, Notification)> {
        let (payout, notification) = self.payout.process_payout()?;
        self.payout = payout;
        Ok((self, notification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::simulate_submission;
    use chrono::TimeZone;
    use std::time::Duration;

    fn filled(connected: bool) -> DashboardState {
        let state = DashboardState::default()
            .set_field(ClaimField::ClaimantName, "John Smith")
            .set_field(ClaimField::PolicyNumber, "POL-1")
            .set_field(ClaimField::Ssn, "***-1234")
            .set_field(ClaimField::ClaimType, "auto")
            .set_field(ClaimField::IncidentDate, "2024-01-01")
            .set_field(ClaimField::ClaimAmount, "100")
            .set_field(ClaimField::Description, "dent");
        if connected {
            state.toggle_connection().0
        } else {
            state
        }
    }

    fn started(state: DashboardState) -> (DashboardState, SubmissionTicket) {
        match state.begin_submit() {
            (next, SubmitOutcome::Started { ticket, .. }) => (next, ticket),
            (_, other) => panic!("expected submission to start, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = DashboardState::default();
        assert_eq!(state.form, ClaimFormRecord::sample());
        assert!(!state.is_connected());
        assert!(!state.can_submit());
        assert!(!state.show_sensitive);
    }

    #[test]
    fn test_encrypting_notification_names_claim_type() {
        match filled(true).begin_submit() {
            (_, SubmitOutcome::Started { notification, .. }) => {
                assert_eq!(notification.message, "Encrypting Auto claim CLM-004...")
            }
            (_, other) => panic!("expected submission to start, got {:?}", other),
        }
    }

    #[test]
    fn test_disconnected_submit_is_rejected() {
        let state = filled(false);
        let (next, outcome) = state.clone().begin_submit();
        assert_eq!(outcome, SubmitOutcome::Rejected(ClaimError::NotConnected));
        assert_eq!(next, state);
    }

    #[test]
    fn test_missing_description_is_rejected_without_changes() {
        let state = filled(true).set_field(ClaimField::Description, "");
        let (next, outcome) = state.clone().begin_submit();
        match outcome {
            SubmitOutcome::Rejected(err) => {
                assert_eq!(err.to_string(), "Incident description is required")
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(next, state);
        assert_eq!(next.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_each_missing_field_reports_its_error() {
        for field in ClaimField::ALL {
            let state = filled(true).set_field(field, " ");
            let (next, outcome) = state.clone().begin_submit();
            match outcome {
                SubmitOutcome::Rejected(ClaimError::Validation(err)) => assert_eq!(err.field, field),
                other => panic!("unexpected outcome {:?} for {}", other, field),
            }
            assert_eq!(next.form, state.form);
        }
    }

    #[test]
    fn test_submit_enters_encrypting() {
        let (state, ticket) = started(filled(true));
        assert_eq!(ticket.claim_id, "CLM-004");
        assert_eq!(state.phase.claim_id(), Some("CLM-004"));
        assert!(!state.can_submit());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_noop() {
        let (state, _) = started(filled(true));
        let (next, outcome) = state.clone().begin_submit();
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(next, state);
    }

    #[test]
    fn test_complete_resets_transient_fields() {
        let (state, ticket) = started(filled(true));
        let (state, note) = state.complete_submit(&ticket.into()).unwrap();

        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(note.message.contains("CLM-004"));
        assert_eq!(state.form.claimant_name, "John Smith");
        assert_eq!(state.form.policy_number, "POL-1");
        assert_eq!(state.form.ssn, "***-1234");
        assert!(state.form.claim_type.is_empty());
        assert!(state.form.incident_date.is_empty());
        assert!(state.form.claim_amount.is_empty());
        assert!(state.form.description.is_empty());
        assert!(state.can_submit());
    }

    #[test]
    fn test_claim_ids_are_sequential() {
        let (state, first) = started(filled(true));
        let (state, _) = state.complete_submit(&first.into()).unwrap();
        let state = state
            .set_field(ClaimField::ClaimType, "home")
            .set_field(ClaimField::IncidentDate, "2024-02-01")
            .set_field(ClaimField::ClaimAmount, "50")
            .set_field(ClaimField::Description, "leak");
        let (_, second) = started(state);
        assert_eq!(second.claim_id, "CLM-005");
    }

    #[test]
    fn test_complete_with_stale_receipt_fails() {
        let (state, ticket) = started(filled(true));
        let mut receipt = ClaimReceipt::from(ticket);
        receipt.claim_id = "CLM-999".to_string();
        assert!(matches!(state.complete_submit(&receipt), Err(ClaimError::State(_))));
    }

    #[test]
    fn test_abort_keeps_form() {
        let before = filled(true);
        let (state, _) = started(before.clone());
        let state = state.abort_submit();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert_eq!(state.form, before.form);
    }

    #[test]
    fn test_set_field_by_key() {
        let state = DashboardState::default()
            .set_field_by_key("claimAmount", "250.00")
            .unwrap();
        assert_eq!(state.form.claim_amount, "250.00");
        assert!(DashboardState::default().set_field_by_key("nope", "x").is_err());
    }

    #[test]
    fn test_toggle_sensitive() {
        let state = DashboardState::default().toggle_sensitive();
        assert!(state.show_sensitive);
        assert!(!state.toggle_sensitive().show_sensitive);
    }

    #[test]
    fn test_payout_requires_connection() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let state = DashboardState::default()
            .set_payout_field(PayoutField::Description, "batch")
            .set_payout_field(PayoutField::Amount, "10");
        assert_eq!(
            state.clone().create_payout_request(now).unwrap_err(),
            ClaimError::NotConnected
        );

        let (state, _) = state.toggle_connection();
        let (state, _) = state.create_payout_request(now).unwrap();
        let (state, _) = state.process_payout().unwrap();
        assert_eq!(state.payout.processed.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_submission_sequence() {
        let (state, ticket) = started(filled(true));
        let (_handle, task) =
            simulate_submission(ticket, tokio::time::sleep(Duration::from_secs(2)));

        let before = tokio::time::Instant::now();
        let receipt = task.await.unwrap();
        assert!(before.elapsed() >= Duration::from_secs(2));

        let (state, note) = state.complete_submit(&receipt).unwrap();
        assert_eq!(note.level, crate::notify::NotificationLevel::Success);
        assert!(state.form.description.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_sequence_leaves_form() {
        let before = filled(true);
        let (state, ticket) = started(before.clone());
        let (handle, task) =
            simulate_submission(ticket, tokio::time::sleep(Duration::from_secs(2)));
        handle.cancel();

        assert_eq!(task.await, Err(ClaimError::Cancelled));
        let state = state.abort_submit();
        assert_eq!(state.form, before.form);
        assert!(state.can_submit());
    }
}
