//! Drives the encrypting phase of a claim submission in the browser.

use lib_claims::{simulate_submission, SubmissionHandle, SubmissionTicket};
use std::time::Duration;

use crate::state::dashboard::DashboardContext;

/// Spawn the simulated submission on the local executor. The returned handle
/// cancels it; the context is told about the outcome either way.
pub fn spawn(ctx: DashboardContext, ticket: SubmissionTicket, delay: Duration) -> SubmissionHandle {
    let (handle, task) = simulate_submission(ticket, gloo_timers::future::sleep(delay));

    leptos::task::spawn_local(async move {
        let result = task.await;
        ctx.finish_submission(result);
    });

    handle
}
