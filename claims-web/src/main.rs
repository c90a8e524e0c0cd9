//! Cipher Payout Hub - insurance claims dashboard
//!
//! Client-side only. Wallet connection, claim encryption and payout contract
//! calls are all simulated; nothing leaves the browser.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("claims dashboard starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document available, cannot hide loading screen");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(utils::constants::LOADING_ELEMENT_ID) else {
        log::warn!("loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::error!("failed to add 'hidden' class: {:?}", e);
        }
    }

    // Also set display:none as backup
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::error!("failed to set loading element style: {:?}", e);
    }
}
