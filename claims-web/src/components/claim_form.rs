//! Claim submission form
//!
//! Inputs write straight into the dashboard state; nothing is validated until
//! submit is pressed.

use leptos::prelude::*;
use lib_utils::format_calendar_date;
use shared::dto::claims::{ClaimField, ClaimType};

use crate::state::dashboard::{use_dashboard_context, DashboardContext};
use crate::utils::format::format_claim_amount;

/// Text input bound to one claim field. Sensitive fields blur while hidden.
fn text_input(ctx: DashboardContext, field: ClaimField, placeholder: &'static str) -> impl IntoView {
    let class = move || {
        if field.is_sensitive() && !ctx.show_sensitive() {
            "input blur-sensitive"
        } else {
            "input"
        }
    };

    view! {
        <div class="form-row">
            <label class="label" for=field.key()>{field.label()}</label>
            <input
                id=field.key()
                class=class
                placeholder=placeholder
                prop:value=move || ctx.field(field)
                on:input=move |ev| ctx.set_field(field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ClaimForm() -> impl IntoView {
    let ctx = use_dashboard_context();

    let amount_preview = move || format_claim_amount(&ctx.field(ClaimField::ClaimAmount));
    let date_preview = move || {
        let date = ctx.field(ClaimField::IncidentDate);
        (!date.is_empty()).then(|| format_calendar_date(&date))
    };

    view! {
        <div class="card gradient-card">
            <div class="card-header">
                <div class="card-header-row">
                    <h2 class="card-title">"Submit New Claim"</h2>
                    <button class="btn btn-outline btn-sm" on:click=move |_| ctx.toggle_sensitive()>
                        {move || if ctx.show_sensitive() { "Hide Sensitive" } else { "Show Sensitive" }}
                    </button>
                </div>
                <p class="card-description">
                    "All data is encrypted and visible only to authorized adjusters"
                </p>
            </div>

            <div class="card-content">
                {text_input(ctx, ClaimField::ClaimantName, "Full legal name")}
                {text_input(ctx, ClaimField::PolicyNumber, "POL-000000000")}
                {text_input(ctx, ClaimField::Ssn, "***-**-0000")}

                <div class="form-row">
                    <label class="label" for=ClaimField::ClaimType.key()>{ClaimField::ClaimType.label()}</label>
                    <select
                        id=ClaimField::ClaimType.key()
                        class="input"
                        prop:value=move || ctx.field(ClaimField::ClaimType)
                        on:change=move |ev| ctx.set_field(ClaimField::ClaimType, event_target_value(&ev))
                    >
                        <option value="">"Select claim type"</option>
                        {ClaimType::ALL
                            .iter()
                            .map(|claim_type| view! {
                                <option value=claim_type.value()>{claim_type.label()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <label class="label" for=ClaimField::IncidentDate.key()>{ClaimField::IncidentDate.label()}</label>
                    <input
                        type="date"
                        id=ClaimField::IncidentDate.key()
                        class="input"
                        prop:value=move || ctx.field(ClaimField::IncidentDate)
                        on:input=move |ev| ctx.set_field(ClaimField::IncidentDate, event_target_value(&ev))
                    />
                    {move || date_preview().map(|date| view! { <span class="input-hint">{date}</span> })}
                </div>

                <div class="form-row">
                    <label class="label" for=ClaimField::ClaimAmount.key()>{ClaimField::ClaimAmount.label()}</label>
                    <div class="input-prefixed">
                        <span class="input-prefix">"$"</span>
                        <input
                            id=ClaimField::ClaimAmount.key()
                            class="input"
                            placeholder="0.00"
                            prop:value=move || ctx.field(ClaimField::ClaimAmount)
                            on:input=move |ev| ctx.set_field(ClaimField::ClaimAmount, event_target_value(&ev))
                        />
                    </div>
                    {move || amount_preview().map(|amount| view! { <span class="input-hint">{amount}</span> })}
                </div>

                <div class="form-row">
                    <label class="label" for=ClaimField::Description.key()>{ClaimField::Description.label()}</label>
                    <textarea
                        id=ClaimField::Description.key()
                        class="input textarea"
                        placeholder="Provide detailed description of the incident..."
                        prop:value=move || ctx.field(ClaimField::Description)
                        on:input=move |ev| ctx.set_field(ClaimField::Description, event_target_value(&ev))
                    ></textarea>
                </div>

                <button
                    type="button"
                    class="btn btn-primary gradient-secure"
                    prop:disabled=move || !ctx.can_submit()
                    on:click=move |_| ctx.submit()
                >
                    {move || if ctx.is_submitting() { "Encrypting..." } else { "Submit Encrypted Claim" }}
                </button>
            </div>
        </div>
    }
}
