//! Dashboard state management
//!
//! One context holds the whole [`DashboardState`] in a signal. Handlers read
//! the current value, run a `lib_claims` transition and write the result back.

use leptos::prelude::*;
use lib_claims::{
    ClaimError, DashboardConfig, DashboardState, Notification, PayoutField, SubmissionHandle,
    SubmitOutcome, ToastQueue,
};
use shared::dto::claims::ClaimField;

use crate::services::{notifications, submission};

/// Global dashboard context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub state: RwSignal<DashboardState>,
    pub toasts: RwSignal<ToastQueue>,
    pub config: StoredValue<DashboardConfig>,
    submission: StoredValue<Option<SubmissionHandle>>,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: RwSignal::new(DashboardState::new(&config)),
            toasts: RwSignal::new(ToastQueue::new(config.max_toasts)),
            config: StoredValue::new(config),
            submission: StoredValue::new(None),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.is_connected())
    }

    pub fn can_submit(&self) -> bool {
        self.state.with(|state| state.can_submit())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|state| state.phase.is_in_flight())
    }

    pub fn show_sensitive(&self) -> bool {
        self.state.with(|state| state.show_sensitive)
    }

    pub fn field(&self, field: ClaimField) -> String {
        self.state.with(|state| state.form.get(field).to_string())
    }

    pub fn notify(&self, notification: Notification) {
        notifications::show(self.toasts, self.config.with_value(|c| c.toast_duration()), notification);
    }

    pub fn notify_error(&self, err: &ClaimError) {
        self.notify(Notification::from(err));
    }

    pub fn toggle_connection(&self) {
        let (next, notification) = self.state.get_untracked().toggle_connection();
        self.state.set(next);
        self.notify(notification);
    }

    pub fn toggle_sensitive(&self) {
        let next = self.state.get_untracked().toggle_sensitive();
        self.state.set(next);
    }

    pub fn set_field(&self, field: ClaimField, value: String) {
        let next = self.state.get_untracked().set_field(field, value);
        self.state.set(next);
    }

    pub fn set_payout_field(&self, field: PayoutField, value: String) {
        let next = self.state.get_untracked().set_payout_field(field, value);
        self.state.set(next);
    }

    /// Validate the form and start the simulated submission.
    pub fn submit(&self) {
        let (next, outcome) = self.state.get_untracked().begin_submit();
        self.state.set(next);

        match outcome {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Rejected(err) => self.notify_error(&err),
            SubmitOutcome::Started { ticket, notification } => {
                self.notify(notification);
                let delay = self.config.with_value(|c| c.submit_delay());
                let handle = submission::spawn(*self, ticket, delay);
                self.submission.set_value(Some(handle));
            }
        }
    }

    /// Called by the submission task once it resolves.
    pub fn finish_submission(&self, result: lib_claims::Result<lib_claims::ClaimReceipt>) {
        let _ = self.submission.try_set_value(None);

        let Some(current) = self.state.try_get_untracked() else {
            // Dashboard already torn down.
            return;
        };

        match result.and_then(|receipt| current.clone().complete_submit(&receipt)) {
            Ok((next, notification)) => {
                self.state.set(next);
                self.notify(notification);
            }
            Err(ClaimError::Cancelled) => {
                let _ = self.state.try_set(current.abort_submit());
            }
            Err(err) => {
                log::error!("submission failed: {}", err);
                self.state.set(current.abort_submit());
                self.notify_error(&err);
            }
        }
    }

    /// Abort a running submission. Only used when the dashboard unmounts.
    pub fn cancel_submission(&self) {
        self.submission.try_with_value(|handle| match handle {
            Some(handle) if !handle.is_cancelled() => {
                log::debug!("cancelling running submission");
                handle.cancel();
            }
            _ => {}
        });
    }

    pub fn create_payout_request(&self) {
        let now = lib_utils::now_utc();
        self.apply(move |state| state.create_payout_request(now));
    }

    pub fn add_payout_recipient(&self) {
        self.apply(DashboardState::add_payout_recipient);
    }

    pub fn process_payout(&self) {
        self.apply(DashboardState::process_payout);
    }

    /// Run a fallible transition, keeping the old state on error.
    fn apply<F>(&self, transition: F)
    where
        F: FnOnce(DashboardState) -> lib_claims::Result<(DashboardState, Notification)>,
    {
        match transition(self.state.get_untracked()) {
            Ok((next, notification)) => {
                self.state.set(next);
                self.notify(notification);
            }
            Err(err) => self.notify_error(&err),
        }
    }
}

pub fn provide_dashboard_context(config: DashboardConfig) -> DashboardContext {
    let context = DashboardContext::new(config);
    provide_context(context);
    context
}

pub fn use_dashboard_context() -> DashboardContext {
    expect_context::<DashboardContext>()
}
