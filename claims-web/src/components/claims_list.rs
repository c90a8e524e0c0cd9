//! Recent claims: a fixed sample list, never updated by submissions

use leptos::prelude::*;
use shared::dto::claims::{sample_claims, ClaimSummary};

use crate::utils::format::format_usd;

#[component]
pub fn ClaimsList() -> impl IntoView {
    let claims = sample_claims();

    view! {
        <div class="card gradient-card">
            <div class="card-header">
                <h2 class="card-title">"Recent Claims"</h2>
                <p class="card-description">"Your submitted claims and their status"</p>
            </div>
            <div class="card-content">
                {claims.into_iter().map(claim_row).collect_view()}
            </div>
        </div>
    }
}

fn claim_row(claim: ClaimSummary) -> impl IntoView {
    view! {
        <div class="claim-row">
            <div>
                <p class="claim-id">{claim.id}</p>
                <p class="claim-meta">
                    {format!("{} \u{2022} {}", claim.claim_type.short_label(), claim.date)}
                </p>
            </div>
            <div class="claim-right">
                <p class="claim-amount">{format_usd(claim.amount_usd)}</p>
                <span class=claim.status.badge().css_class()>{claim.status.label()}</span>
            </div>
        </div>
    }
}
