//! Wallet connection card. Toggling is a UI flag only; no provider is contacted.

use leptos::prelude::*;
use shared::utils::short_address;

use crate::services::clipboard;
use crate::state::dashboard::use_dashboard_context;
use crate::utils::constants::COPY_FEEDBACK_MS;

#[component]
pub fn WalletGate() -> impl IntoView {
    let ctx = use_dashboard_context();
    let (copied, set_copied) = signal(false);
    let address = ctx.config.with_value(|c| c.wallet_address.clone());
    let display_address = short_address(&address);

    let copy_address = move |_| {
        let address = address.clone();
        leptos::task::spawn_local(async move {
            match clipboard::copy_text(&address).await {
                Ok(()) => {
                    set_copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    let _ = set_copied.try_set(false);
                }
                Err(e) => log::warn!("{}", e),
            }
        });
    };

    view! {
        <div class="card gradient-card wallet-card">
            <div class="card-header centered">
                <h2 class="card-title">"Wallet Connection Required"</h2>
                <p class="card-description">
                    "Connect your secure wallet to submit and manage insurance claims"
                </p>
            </div>
            <div class="card-content centered">
                <button
                    class=move || if ctx.is_connected() { "btn btn-secondary" } else { "btn btn-primary" }
                    on:click=move |_| ctx.toggle_connection()
                >
                    {move || if ctx.is_connected() { "Wallet Connected \u{2713}" } else { "Connect Wallet" }}
                </button>
                <Show when=move || ctx.is_connected()>
                    <p class="wallet-address">
                        {format!("Wallet: {}", display_address)}
                        <span class="badge badge-outline">"Verified"</span>
                        <button class="btn btn-ghost btn-sm" on:click=copy_address.clone()>
                            {move || if copied.get() { "\u{2713}" } else { "Copy" }}
                        </button>
                    </p>
                </Show>
            </div>
        </div>
    }
}
