//! Encrypted payout console. Contract calls are simulated and only listed.

use leptos::prelude::*;
use lib_claims::PayoutField;
use shared::dto::payout::PayoutRequest;
use shared::utils::short_address;

use crate::state::dashboard::{use_dashboard_context, DashboardContext};
use crate::utils::format::format_number;

fn payout_input(
    ctx: DashboardContext,
    field: PayoutField,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = move || ctx.state.with(|state| state.payout.draft.get(field).to_string());

    view! {
        <div class="form-row">
            <label class="label" for=id>{label}</label>
            <input
                id=id
                class="input"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| ctx.set_payout_field(field, event_target_value(&ev))
            />
        </div>
    }
}

fn request_summary(request: PayoutRequest) -> impl IntoView {
    view! {
        <div class="payout-summary">
            <p class="claim-id">{format!("Payout #{}", request.id)}</p>
            <p class="claim-meta">{request.description.clone()}</p>
            <p class="claim-meta">
                {format!(
                    "{} of {} allocated to {} recipient(s), deadline {}",
                    format_number(request.allocated() as f64, 0),
                    format_number(f64::from(request.amount), 0),
                    request.recipients.len(),
                    request.deadline.format("%Y-%m-%d %H:%M UTC"),
                )}
            </p>
        </div>
    }
}

#[component]
pub fn PayoutConsole() -> impl IntoView {
    let ctx = use_dashboard_context();
    let contract = ctx.state.with_untracked(|state| state.payout.contract_address().to_string());

    let current = move || ctx.state.with(|state| state.payout.current.clone());
    let calls = move || ctx.state.with(|state| state.payout.calls.clone());

    view! {
        <Show
            when=move || ctx.is_connected()
            fallback=|| view! {
                <div class="card gradient-card">
                    <div class="card-header">
                        <h2 class="card-title">"Contract Interaction"</h2>
                    </div>
                    <p class="card-description centered">
                        "Please connect your wallet to interact with the smart contract"
                    </p>
                </div>
            }
        >
            <div class="card gradient-card">
                <div class="card-header">
                    <h2 class="card-title">"Create Encrypted Payout Request"</h2>
                    <p class="card-description">{format!("Contract {}", short_address(&contract))}</p>
                </div>
                <div class="card-content">
                    {payout_input(ctx, PayoutField::Description, "payout-description", "Payout Description", "Describe the purpose of this payout...")}
                    {payout_input(ctx, PayoutField::Amount, "payout-amount", "Total Amount", "1000")}
                    <button class="btn btn-primary" on:click=move |_| ctx.create_payout_request()>
                        "Create Payout Request"
                    </button>
                    {move || current().map(request_summary)}
                </div>
            </div>

            <div class="card gradient-card">
                <div class="card-header">
                    <h2 class="card-title">"Add Recipients"</h2>
                </div>
                <div class="card-content">
                    {payout_input(ctx, PayoutField::RecipientAddress, "recipient-address", "Recipient Address", "0x...")}
                    {payout_input(ctx, PayoutField::RecipientAmount, "recipient-amount", "Amount", "100")}
                    {payout_input(ctx, PayoutField::Metadata, "recipient-metadata", "Encrypted Metadata", "Additional encrypted information...")}
                    <button class="btn btn-primary" on:click=move |_| ctx.add_payout_recipient()>
                        "Add Recipient"
                    </button>
                </div>
            </div>

            <div class="card gradient-card">
                <div class="card-header">
                    <h2 class="card-title">"Process Encrypted Payout"</h2>
                    <p class="card-description">
                        "Process the payout with FHE-encrypted data. All sensitive information is encrypted before being stored on-chain."
                    </p>
                </div>
                <div class="card-content">
                    <div class="header-badges">
                        <span class="badge badge-secondary">"FHE Encrypted"</span>
                        <span class="badge badge-outline">"Zero-Knowledge"</span>
                        <span class="badge badge-outline">"Privacy-Preserving"</span>
                    </div>
                    <button class="btn btn-primary" on:click=move |_| ctx.process_payout()>
                        "Process Payout"
                    </button>
                    <ul class="contract-calls">
                        {move || {
                            calls()
                                .into_iter()
                                .rev()
                                .map(|call| view! {
                                    <li>{format!("{}(#{}) \u{2192} {}", call.function.name(), call.payout_id, short_address(&call.contract_address))}</li>
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
        </Show>
    }
}
