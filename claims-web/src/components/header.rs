//! Page header with product name and feature badges

use leptos::prelude::*;

use crate::state::dashboard::use_dashboard_context;
use crate::utils::constants::{APP_NAME, APP_TAGLINE, HEADER_BADGES};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <header class="gradient-header">
            <div class="header-inner">
                <div class="brand">
                    <div class="brand-logo">"\u{1F511}"</div>
                    <div>
                        <h1 class="brand-title">{APP_NAME}</h1>
                        <p class="brand-tagline">{APP_TAGLINE}</p>
                    </div>
                </div>
                <div class="header-badges">
                    {HEADER_BADGES
                        .iter()
                        .map(|badge| view! { <span class="header-badge">{*badge}</span> })
                        .collect_view()}
                    <span class="header-badge header-status">
                        {move || if ctx.is_connected() { "Wallet Connected" } else { "No Wallet" }}
                    </span>
                </div>
            </div>
        </header>
    }
}
