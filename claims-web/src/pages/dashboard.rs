//! Claims Dashboard Page - connection gate, claim form, recent claims and the payout console

use leptos::prelude::*;

use crate::components::{ClaimForm, ClaimsList, PayoutConsole, WalletGate};
use crate::state::dashboard::use_dashboard_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_dashboard_context();

    // A submission still encrypting when the page goes away is abandoned.
    on_cleanup(move || ctx.cancel_submission());

    view! {
        <div class="dashboard">
            <WalletGate/>
            <div class="dashboard-grid">
                <ClaimForm/>
                <ClaimsList/>
            </div>
            <section class="payout-section">
                <PayoutConsole/>
            </section>
        </div>
    }
}
