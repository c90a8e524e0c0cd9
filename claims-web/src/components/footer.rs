//! Static footer

use leptos::prelude::*;

use crate::utils::constants::{APP_NAME, FOOTER_CONTACT, FOOTER_SECURITY, FOOTER_SERVICES};

#[component]
pub fn Footer() -> impl IntoView {
    let column = |title: &'static str, items: &'static [&'static str]| {
        view! {
            <div class="footer-column">
                <h4>{title}</h4>
                <ul>
                    {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
        }
    };

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <h3>{APP_NAME}</h3>
                    <p>"Decentralized payout management with FHE encryption for maximum privacy and security."</p>
                </div>
                {column("Services", FOOTER_SERVICES)}
                {column("Contact", FOOTER_CONTACT)}
                {column("Security", FOOTER_SECURITY)}
            </div>
            <p class="footer-note">
                {format!("\u{00A9} 2024 {}. All rights reserved. | Protected by FHE encryption", APP_NAME)}
            </p>
        </footer>
    }
}
